use std::path::PathBuf;

use crate::models::avatar::DEFAULT_SIZE;

const DEFAULT_LOG_FILTER: &str = "pixatar=info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarConfig {
    pub default_size: u32,
    pub export_dir: PathBuf,
    pub log_filter: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_SIZE,
            export_dir: PathBuf::from("."),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AvatarConfig {
    /// Reads `AVATAR_SIZE`, `AVATAR_EXPORT_DIR` and `AVATAR_LOG`, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_size = match lookup("AVATAR_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    tracing::warn!("Ignoring invalid AVATAR_SIZE: {:?}", raw);
                    defaults.default_size
                }
            },
            None => defaults.default_size,
        };

        let export_dir = lookup("AVATAR_EXPORT_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);

        let log_filter = lookup("AVATAR_LOG")
            .filter(|filter| !filter.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            default_size,
            export_dir,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AvatarConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, AvatarConfig::default());
        assert_eq!(config.default_size, 128);
    }

    #[test]
    fn test_reads_values() {
        let config = AvatarConfig::from_lookup(lookup_from(&[
            ("AVATAR_SIZE", "256"),
            ("AVATAR_EXPORT_DIR", "/tmp/avatars"),
            ("AVATAR_LOG", "pixatar=debug"),
        ]));
        assert_eq!(config.default_size, 256);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/avatars"));
        assert_eq!(config.log_filter, "pixatar=debug");
    }

    #[test]
    fn test_bad_size_falls_back() {
        for raw in ["0", "-4", "big"] {
            let config = AvatarConfig::from_lookup(lookup_from(&[("AVATAR_SIZE", raw)]));
            assert_eq!(config.default_size, DEFAULT_SIZE);
        }
    }
}
