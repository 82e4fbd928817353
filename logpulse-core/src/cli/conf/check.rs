use crate::conf::{ConfigError, LogpulseConfig, load_config};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    print!("{}", check_report(&cfg));
    Ok(())
}

pub fn check_report(cfg: &LogpulseConfig) -> String {
    let mut out = String::new();

    out.push_str("✔ Config loaded successfully\n");
    out.push_str(&format!(
        "✔ default source: {}\n",
        cfg.analysis.default_source.display()
    ));

    match &cfg.analysis.filter_level {
        Some(level) if !level.trim().is_empty() => {
            out.push_str(&format!("✔ default filter: {}\n", level.trim().to_uppercase()));
        }
        _ => out.push_str("✔ no default filter\n"),
    }

    match cfg.output.format {
        Some(format) => out.push_str(&format!("✔ output format: {format:?}\n")),
        None => out.push_str("✔ output format: auto\n"),
    }

    if let Some(file) = &cfg.output.summary_file {
        out.push_str(&format!("✔ summary file: {}\n", file.display()));
    }

    out
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::InvalidFilterLevel { .. } => Some(
            "filter_level must be one of INFO, WARNING, ERROR, DEBUG or CRITICAL (any case).\n\
             \n\
             Example:\n\
             \n\
             [analysis]\n\
             filter_level = \"error\"",
        ),
        ConfigError::Parse { .. } => Some(
            "Run `logpulse conf init` to write a commented starter config.",
        ),
        ConfigError::ReadFile { .. } => None,
    }
}
