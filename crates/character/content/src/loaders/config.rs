//! Character configuration loader.

use std::path::Path;

use anyhow::Context;
use character_core::CharacterConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for character configuration from TOML files.
///
/// Missing keys, including a single bound of `score_roll`, fall back to
/// [`CharacterConfig::default`]:
///
/// ```toml
/// proficiency_bonus = 3
///
/// [score_roll]
/// min = 3
/// max = 18
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate a config from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CharacterConfig> {
        let content = read_file(path)?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid character config in {}", path.display()))?;
        tracing::info!(path = %path.display(), ?config, "loaded character config");
        Ok(config)
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml_str(content: &str) -> LoadResult<CharacterConfig> {
        let config: CharacterConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use character_core::ScoreRange;

    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = ConfigLoader::from_toml_str("").unwrap();
        assert_eq!(config, CharacterConfig::default());
    }

    #[test]
    fn partial_document_overrides_named_fields() {
        let config = ConfigLoader::from_toml_str("proficiency_bonus = 4").unwrap();
        assert_eq!(config.proficiency_bonus, 4);
        assert_eq!(config.score_roll, CharacterConfig::DEFAULT_SCORE_ROLL);
    }

    #[test]
    fn partial_score_roll_table_keeps_default_bound() {
        let config = ConfigLoader::from_toml_str("[score_roll]\nmax = 20").unwrap();
        assert_eq!(config.score_roll, ScoreRange::new(8, 20));
        assert_eq!(config.proficiency_bonus, CharacterConfig::DEFAULT_PROFICIENCY_BONUS);

        let config = ConfigLoader::from_toml_str("[score_roll]\nmin = 3").unwrap();
        assert_eq!(config.score_roll, ScoreRange::new(3, 18));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "proficiency_bonus = 3\n\n[score_roll]\nmin = 3\nmax = 18").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.score_roll, ScoreRange::new(3, 18));
        assert_eq!(config.proficiency_bonus, 3);
    }

    #[test]
    fn inverted_range_fails_validation() {
        let err = ConfigLoader::from_toml_str("[score_roll]\nmin = 18\nmax = 3").unwrap_err();
        assert!(err.to_string().contains("18..=3"), "{err}");
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = ConfigLoader::from_toml_str("proficiency_bonus = \"two\"").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config TOML"));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = ConfigLoader::load(Path::new("/nonexistent/character.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }
}
