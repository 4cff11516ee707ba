//! `rollcall run` / `script` / `validate` command implementations.

use std::path::{Path, PathBuf};

use rollcall_engine::extract::load_csv;
use rollcall_engine::script::generate_marker_script;
use rollcall_engine::sort::MIN_ATTENDANCE_MINUTES;
use rollcall_engine::{AttendanceRecord, RollupConfig, RollupResult};

use crate::render;
use crate::CliError;

fn load_config(path: Option<&Path>, extra_ignore: &[String]) -> Result<RollupConfig, CliError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| CliError::runtime(format!("cannot read config: {e}")))?;
            RollupConfig::from_toml(&text).map_err(CliError::engine)?
        }
        None => RollupConfig::default(),
    };

    // CLI patterns run after config patterns, in the order given.
    config.ignore.patterns.extend(extra_ignore.iter().cloned());
    Ok(config)
}

fn load_records(input: &Path) -> Result<Vec<AttendanceRecord>, CliError> {
    let csv_data = std::fs::read_to_string(input)
        .map_err(|e| CliError::runtime(format!("cannot read {}: {e}", input.display())))?;
    load_csv(&csv_data).map_err(CliError::engine)
}

fn run_pipeline(
    input: &Path,
    config_path: Option<&Path>,
    ignore: &[String],
) -> Result<(RollupConfig, RollupResult), CliError> {
    let config = load_config(config_path, ignore)?;
    let records = load_records(input)?;
    let result = rollcall_engine::run(&config, &records).map_err(CliError::engine)?;
    Ok((config, result))
}

pub fn cmd_run(
    input: PathBuf,
    config_path: Option<PathBuf>,
    ignore: Vec<String>,
    json_output: bool,
    output_file: Option<PathBuf>,
    script_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let (config, result) = run_pipeline(&input, config_path.as_deref(), &ignore)?;

    // JSON goes to --output, the config's output.json path, or stdout.
    let json_target = output_file.or_else(|| config.output.json.as_deref().map(PathBuf::from));
    if json_output || json_target.is_some() {
        let json_str = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::runtime(format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = json_target {
            std::fs::write(path, &json_str)
                .map_err(|e| CliError::runtime(format!("cannot write output: {e}")))?;
            eprintln!("wrote {}", path.display());
        }
        if json_output {
            println!("{json_str}");
        }
    }

    if !json_output {
        print!("{}", render::table(&result.participants));
    }

    if let Some(ref path) = script_file {
        let script = generate_marker_script(&result.participants);
        std::fs::write(path, script)
            .map_err(|e| CliError::runtime(format!("cannot write script: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    let c = &result.summary;
    eprintln!(
        "{} row(s): {} participant(s), {} under {} min, {} ignored, {} without identity",
        c.rows,
        c.participants,
        c.insufficient,
        MIN_ATTENDANCE_MINUTES,
        c.ignored,
        c.skipped_no_identity,
    );

    Ok(())
}

pub fn cmd_script(
    input: PathBuf,
    config_path: Option<PathBuf>,
    ignore: Vec<String>,
    output_file: Option<PathBuf>,
) -> Result<(), CliError> {
    let (_, result) = run_pipeline(&input, config_path.as_deref(), &ignore)?;
    let script = generate_marker_script(&result.participants);

    match output_file {
        Some(path) => {
            std::fs::write(&path, script)
                .map_err(|e| CliError::runtime(format!("cannot write script: {e}")))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{script}"),
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::runtime(format!("cannot read config: {e}")))?;

    let config = RollupConfig::from_toml(&text).map_err(CliError::engine)?;
    eprintln!(
        "valid: '{}' with {} ignore pattern(s)",
        config.name,
        config.ignore.patterns.len(),
    );
    Ok(())
}
