use std::path::Path;

use anyhow::Context;
use toml::{map::Map, Value};

pub fn load_config(
    path: impl AsRef<Path>,
) -> anyhow::Result<Map<String, Value>> {
    let path = path.as_ref();
    let config = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&config)
        .with_context(|| format!("failed to parse {}", path.display()))
}

/// Secrets are optional; a missing file yields `None`.
pub fn load_env(
    path: impl AsRef<Path>,
) -> anyhow::Result<Option<Map<String, Value>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }

    let secrets = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&secrets)
        .map(Some)
        .with_context(|| format!("failed to parse {}", path.display()))
}

pub fn get_str<'a>(
    config: &'a Map<String, Value>,
    section: &str,
    key: &str,
) -> anyhow::Result<&'a str> {
    config
        .get(section)
        .with_context(|| format!("failed to get {} config", section))?
        .get(key)
        .with_context(|| format!("failed to load {}.{} config", section, key))?
        .as_str()
        .with_context(|| format!("failed to parse {}.{} config", section, key))
}

pub fn get_integer(
    config: &Map<String, Value>,
    section: &str,
    key: &str,
) -> anyhow::Result<i64> {
    config
        .get(section)
        .with_context(|| format!("failed to get {} config", section))?
        .get(key)
        .with_context(|| format!("failed to load {}.{} config", section, key))?
        .as_integer()
        .with_context(|| format!("failed to parse {}.{} config", section, key))
}
