use crate::models::Visibility;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GistConfig {
    pub file_extension: String,
    pub visibility: Visibility,
    pub include_raw_link: bool,
    pub exclude_system_messages: bool,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            file_extension: "md".to_string(),
            visibility: Visibility::Public,
            include_raw_link: false,
            exclude_system_messages: false,
        }
    }
}

impl GistConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        // An empty file deserializes to null, which means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GistConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GistConfig::default();
        assert_eq!(config.file_extension, "md");
        assert_eq!(config.visibility, Visibility::Public);
        assert!(!config.include_raw_link);
        assert!(!config.exclude_system_messages);
    }

    #[test]
    fn test_from_file_full() {
        let file = write_config(
            "file_extension: txt\nvisibility: secret\ninclude_raw_link: true\nexclude_system_messages: true\n",
        );
        let config = GistConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            config,
            GistConfig {
                file_extension: "txt".to_string(),
                visibility: Visibility::Secret,
                include_raw_link: true,
                exclude_system_messages: true,
            }
        );
    }

    #[test]
    fn test_from_file_partial_and_empty() {
        let file = write_config("include_raw_link: true\n");
        let config = GistConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert!(config.include_raw_link);
        assert_eq!(config.file_extension, "md");

        let empty = write_config("");
        assert_eq!(GistConfig::from_file(empty.path().to_str().unwrap()).unwrap(), GistConfig::default());
    }

    #[test]
    fn test_from_file_rejects_unknown_visibility() {
        let file = write_config("visibility: private\n");
        assert!(GistConfig::from_file(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_from_file_missing() {
        assert!(GistConfig::from_file("/nonexistent/gist-export.yaml").is_err());
    }
}
