use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_TEMPLATE: &str = r#"# logpulse configuration

[analysis]
# Log file analyzed when no path is passed to `logpulse analyze`.
default_source = "app.log"

# Only report the count of a single level (INFO, WARNING, ERROR, DEBUG, CRITICAL).
# filter_level = "error"

[output]
# "pretty" or "json". Defaults to pretty on a terminal, json otherwise.
# format = "pretty"

# Also write the rendered summary to a file.
# summary_file = "log_summary.txt"

color = true
"#;

pub fn init(path: PathBuf) -> Result<()> {
    // Refuse to overwrite an existing file
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ Wrote {}", path.display());

    Ok(())
}
