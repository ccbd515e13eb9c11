use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use levelgen::GeneratorConfig;

/// Reads a TOML generator config; missing keys keep their defaults.
pub fn load_generator_config(path: &Path) -> Result<GeneratorConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid config in {}", path.display()))?;
    log::info!("Loaded generator config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file should be created");
        file.write_all(contents.as_bytes()).expect("temp file should be writable");
        file
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let file = write_config("max_attempts = 5\nroom_width = [4, 6]\n");
        let config = load_generator_config(file.path()).expect("partial config should load");
        assert_eq!(config.max_attempts, 5);
        assert_eq!(config.room_width, (4, 6));
        assert_eq!(config.relaxed_attempts, GeneratorConfig::default().relaxed_attempts);
    }

    #[test]
    fn invalid_budget_is_reported() {
        let file = write_config("relaxed_attempts = 0\n");
        let err = load_generator_config(file.path()).expect_err("zero budget should fail");
        assert!(format!("{err:#}").contains("relaxed_attempts"), "unexpected error: {err:#}");
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let err = load_generator_config(Path::new("/definitely/not/here.toml"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("here.toml"));
    }
}
