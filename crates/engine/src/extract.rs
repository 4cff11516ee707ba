//! Row extraction: header normalization, schema check, and the positional zip
//! of field names onto row values.

use crate::error::RollupError;
use crate::model::AttendanceRecord;

/// Canonical schema, in order, after header normalization. The trailing
/// attentiveness score is required in the header but never aggregated.
pub const EXPECTED_FIELDS: [&str; 6] = [
    "userName",
    "userEmail",
    "joinTime",
    "leaveTime",
    "duration",
    "attentivenessScore",
];

/// Normalize an exported header cell to its canonical camelCase field name.
///
/// Each space-separated word is truncated at the first `(`, so parenthesized
/// qualifiers vanish: `"Duration (Minutes)"` becomes `"duration"`.
pub fn normalize_header(raw: &str) -> String {
    raw.split(' ')
        .map(|word| word.split('(').next().unwrap_or(""))
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize(word)
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Reject the run unless the normalized headers equal the canonical schema,
/// exactly and in order.
pub fn verify_schema(headers: &[String]) -> Result<(), RollupError> {
    let matches = headers.len() == EXPECTED_FIELDS.len()
        && EXPECTED_FIELDS.iter().zip(headers).all(|(want, got)| want == got);
    if !matches {
        return Err(RollupError::SchemaMismatch {
            found: headers.to_vec(),
        });
    }
    Ok(())
}

/// Positional zip of the schema onto one row. Missing trailing values become
/// absent fields; no validation or coercion happens here.
pub fn extract_record(row: &csv::StringRecord) -> AttendanceRecord {
    AttendanceRecord {
        user_name: field(row, 0),
        user_email: field(row, 1),
        join_time: field(row, 2),
        leave_time: field(row, 3),
        duration: field(row, 4),
    }
}

fn field(row: &csv::StringRecord, index: usize) -> Option<String> {
    row.get(index).map(str::to_string)
}

/// Parse exported CSV text: normalize headers, verify the schema, extract one
/// record per row.
pub fn load_csv(csv_data: &str) -> Result<Vec<AttendanceRecord>, RollupError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| RollupError::Io(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();
    verify_schema(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| RollupError::Io(e.to_string()))?;
        records.push(extract_record(&row));
    }

    Ok(records)
}
