use serde::{Deserialize, Serialize};

/// Environment variable naming a TOML file to load scoring config from.
pub const CONFIG_ENV_VAR: &str = "SCHOONER_SCORING_CONFIG";

/// Fallback config path when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/scoring.toml";

/// Point values for the fixed-score categories.
///
/// Count-based categories (Ones..Eights, N-of-a-kind, Chance) score from the
/// dice themselves and have nothing to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exactly two distinct faces.
    pub full_house: u32,
    /// Four or more distinct faces with at most one gap.
    pub small_straight: u32,
    /// Five distinct faces.
    pub all_different: u32,
    /// Five consecutive faces.
    pub large_straight: u32,
    /// All dice identical.
    pub schooner: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            full_house: 25,
            small_straight: 30,
            all_different: 35,
            large_straight: 40,
            schooner: 50,
        }
    }
}

impl ScoringConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load config from `path`, falling back to defaults.
    pub fn load_from(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    Self::default()
                },
            },
            Err(_) => Self::default(),
        }
    }

    /// Parse config from TOML text. Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_standard_points() {
        let cfg = ScoringConfig::default();
        assert_eq!(cfg.full_house, 25);
        assert_eq!(cfg.small_straight, 30);
        assert_eq!(cfg.all_different, 35);
        assert_eq!(cfg.large_straight, 40);
        assert_eq!(cfg.schooner, 50);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(
            ScoringConfig::from_toml_str("").unwrap(),
            ScoringConfig::default()
        );
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = ScoringConfig::from_toml_str("schooner = 100\nfull_house = 20\n").unwrap();
        assert_eq!(cfg.schooner, 100);
        assert_eq!(cfg.full_house, 20);
        assert_eq!(cfg.large_straight, 40);
    }

    #[test]
    fn invalid_toml_is_error() {
        assert!(ScoringConfig::from_toml_str("schooner = \"lots\"").is_err());
        assert!(ScoringConfig::from_toml_str("not toml {{").is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let cfg = ScoringConfig::load_from("definitely/not/a/real/scoring.toml");
        assert_eq!(cfg, ScoringConfig::default());
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "schooner-scoring-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "small_straight = 15\n").unwrap();
        let cfg = ScoringConfig::load_from(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.small_straight, 15);
        assert_eq!(cfg.all_different, 35);
    }

    #[test]
    fn unparseable_file_falls_back() {
        let path = std::env::temp_dir().join(format!(
            "schooner-scoring-bad-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "full_house = [1, 2]\n").unwrap();
        let cfg = ScoringConfig::load_from(path.to_str().unwrap());
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg, ScoringConfig::default());
    }

    // The only test in this binary that touches CONFIG_ENV_VAR.
    #[test]
    fn load_reads_env_var_path() {
        let path = std::env::temp_dir().join(format!(
            "schooner-scoring-env-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "schooner = 64\n").unwrap();
        // SAFETY: no other test in this binary reads or writes the variable.
        unsafe { std::env::set_var(CONFIG_ENV_VAR, &path) };
        let cfg = ScoringConfig::load();
        unsafe { std::env::remove_var(CONFIG_ENV_VAR) };
        std::fs::remove_file(&path).unwrap();
        assert_eq!(cfg.schooner, 64);
        assert_eq!(cfg.full_house, 25);
    }

    #[test]
    fn toml_roundtrip() {
        let cfg = ScoringConfig {
            schooner: 75,
            ..Default::default()
        };
        let text = toml::to_string(&cfg).unwrap();
        assert_eq!(ScoringConfig::from_toml_str(&text).unwrap(), cfg);
    }
}
