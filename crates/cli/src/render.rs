//! Plain-text table rendering for participant summaries.

use chrono::NaiveDateTime;
use rollcall_engine::ParticipantSummary;

const COLUMNS: [&str; 4] = ["userName", "joinTime", "leaveTime", "duration"];

fn fmt_time(time: &Option<NaiveDateTime>) -> String {
    match time {
        Some(t) => t.format("%Y-%m-%d %H:%M").to_string(),
        None => "invalid".to_string(),
    }
}

fn fmt_duration(minutes: f64) -> String {
    if minutes.is_finite() {
        minutes.to_string()
    } else {
        "invalid".to_string()
    }
}

/// Render summaries as a padded text table, one participant per row.
/// Poisoned aggregates render as "invalid".
pub fn table(summaries: &[ParticipantSummary]) -> String {
    let rows: Vec<[String; 4]> = summaries
        .iter()
        .map(|s| {
            [
                s.name().to_string(),
                fmt_time(&s.join_time),
                fmt_time(&s.leave_time),
                fmt_duration(s.duration),
            ]
        })
        .collect();

    let mut widths = COLUMNS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    render_row(&mut out, &COLUMNS.map(str::to_string), &widths);
    render_row(&mut out, &widths.map(|w| "-".repeat(w)), &widths);
    for row in &rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
