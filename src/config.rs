use crate::images::ImageSet;
use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use std::{env, fs, path::Path};
use tracing::info;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub images: ImageSet,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    info!("Loading config from file {}", path.as_ref().display());
    let yaml_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

    let expanded = expand_env_vars(&yaml_str)?;

    let config = serde_yaml_ng::from_str(&expanded)
        .context("Failed to parse YAML config after environment variable expansion")?;

    Ok(config)
}

/// Replaces `${VAR}` placeholders with environment variables values.
/// Returns an error naming the first missing variable.
fn expand_env_vars(input: &str) -> Result<String> {
    let re =
        Regex::new(r"\$\{([^}]+)}").context("Invalid regex pattern for env var substitution")?;

    let mut result = String::with_capacity(input.len());
    let mut last = 0;
    for caps in re.captures_iter(input) {
        let (Some(whole), Some(var_name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let Ok(value) = env::var(var_name.as_str()) else {
            bail!("Missing environment variable: {}", var_name.as_str());
        };
        result.push_str(&input[last..whole.start()]);
        result.push_str(&value);
        last = whole.end();
    }
    result.push_str(&input[last..]);

    Ok(result)
}
