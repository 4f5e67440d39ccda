use eyre::{Context, Result};
use log::Level;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub range: RangeConfig,
    pub collatz: CollatzConfig,
    pub words: WordsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub start: i64,
    pub step: i64,
    pub stop: i64,
    pub count: usize,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: 0,
            step: 1,
            stop: 10,
            count: 15,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollatzConfig {
    pub limit: u64,
}

impl Default for CollatzConfig {
    fn default() -> Self {
        Self { limit: 1_000_000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub upto: u32,
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self { upto: 1000 }
    }
}

/// Outcome of [`Config::load`].
///
/// Loading happens before the logger exists, so messages are kept here and replayed by
/// [`Loaded::log`] once logging is set up.
#[derive(Debug)]
pub struct Loaded {
    pub config: Config,
    pub notes: Vec<(Level, String)>,
}

impl Loaded {
    pub fn log(&self) {
        for (level, message) in &self.notes {
            log::log!(*level, "{message}");
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Loaded> {
        // An explicit path must load
        if let Some(path) = config_path {
            let config = Self::load_from_file(path)
                .context(format!("Failed to load config from {}", path.display()))?;
            return Ok(Loaded {
                config,
                notes: vec![(Level::Info, format!("Loaded config from: {}", path.display()))],
            });
        }

        let project_name = env!("CARGO_PKG_NAME");
        let file_name = format!("{project_name}.yml");

        // Primary location: ~/.config/<project>/<project>.yml
        let primary = dirs::config_dir().map(|dir| dir.join(project_name).join(&file_name));
        // Fallback location: ./<project>.yml
        let fallback = Some(PathBuf::from(&file_name));

        Ok(Self::load_first_of([primary, fallback].into_iter().flatten()))
    }

    fn load_first_of<I>(candidates: I) -> Loaded
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut notes = Vec::new();

        for candidate in candidates {
            if !candidate.exists() {
                continue;
            }
            match Self::load_from_file(&candidate) {
                Ok(config) => {
                    let message = format!("Loaded config from: {}", candidate.display());
                    notes.push((Level::Info, message));
                    return Loaded { config, notes };
                }
                Err(e) => {
                    notes.push((
                        Level::Warn,
                        format!("Failed to load config from {}: {}", candidate.display(), e),
                    ));
                }
            }
        }

        notes.push((Level::Info, "No config file found, using defaults".to_string()));
        Loaded {
            config: Self::default(),
            notes,
        }
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(content.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults_match_bundled_runs() {
        let config = Config::default();
        assert_eq!(config.range, RangeConfig { start: 0, step: 1, stop: 10, count: 15 });
        assert_eq!(config.collatz.limit, 1_000_000);
        assert_eq!(config.words.upto, 1000);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config("log_level: debug\nrange:\n  step: 3\ncollatz:\n  limit: 1000\n");
        let config = Config::load(Some(&file.path().to_path_buf()))
            .expect("config should load")
            .config;

        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.range, RangeConfig { step: 3, ..RangeConfig::default() });
        assert_eq!(config.collatz.limit, 1000);
        assert_eq!(config.words, WordsConfig::default());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("absent.yml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("range: [not, a, map]\n");
        let err = Config::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config from"));
    }

    #[test]
    fn test_broken_fallback_warns_and_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let broken = dir.path().join("stepseq.yml");
        std::fs::write(&broken, "range: [not, a, map]\n").expect("write config");
        let absent = dir.path().join("absent.yml");

        let loaded = Config::load_first_of([absent, broken.clone()]);

        assert_eq!(loaded.config, Config::default());
        let warnings: Vec<_> = loaded
            .notes
            .iter()
            .filter(|(level, _)| *level == Level::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].1.contains(&broken.display().to_string()));
    }

    #[test]
    fn test_broken_fallback_is_skipped_for_next_candidate() {
        let broken = write_config("range: [not, a, map]\n");
        let good = write_config("words:\n  upto: 5\n");

        let loaded = Config::load_first_of([
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ]);

        assert_eq!(loaded.config.words.upto, 5);
        assert_eq!(loaded.notes[0].0, Level::Warn);
        assert_eq!(loaded.notes[1].0, Level::Info);
    }
}
