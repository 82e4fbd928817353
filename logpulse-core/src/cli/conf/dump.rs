use crate::conf::{LogpulseConfig, load_config};
use std::path::PathBuf;

pub fn dump(path: PathBuf, yaml: bool) -> anyhow::Result<()> {
    let cfg = load_config(&path)?;
    println!("{}", dump_config(&cfg, yaml)?);
    Ok(())
}

/// JSON unless YAML was asked for.
pub fn dump_config(cfg: &LogpulseConfig, yaml: bool) -> anyhow::Result<String> {
    let s = if yaml {
        serde_yaml::to_string(cfg)?
    } else {
        serde_json::to_string_pretty(cfg)?
    };
    Ok(s)
}
