//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on access.

use poker_domain::ResolutionPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("discussion_seconds cannot be 0")]
    InvalidDiscussionSeconds,

    #[error("unknown resolution policy: {0}")]
    UnknownPolicy(String),
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Resolution policy name ("unanimous" or "average")
    pub policy: String,
    /// Length of the discussion window in seconds
    pub discussion_seconds: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            policy: ResolutionPolicy::default().as_str().to_string(),
            discussion_seconds: 30,
        }
    }
}

impl FileSessionConfig {
    /// Parse the policy string into the domain enum.
    ///
    /// Call [`FileConfig::validate`] first; after validation this cannot
    /// fall back to the default.
    pub fn parse_policy(&self) -> ResolutionPolicy {
        self.policy.parse().unwrap_or_default()
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Where the final estimates are written
    pub results_file: String,
    /// Where pause snapshots are written
    pub snapshot_file: String,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            results_file: "results.json".to_string(),
            snapshot_file: "snapshot.json".to_string(),
            color: true,
        }
    }
}

/// Raw REPL configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the countdown bar during discussions
    pub show_progress: bool,
    /// Path to history file
    pub history_file: Option<String>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: None,
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session settings
    pub session: FileSessionConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.session.discussion_seconds == 0 {
            return Err(ConfigValidationError::InvalidDiscussionSeconds);
        }

        if self.session.policy.parse::<ResolutionPolicy>().is_err() {
            return Err(ConfigValidationError::UnknownPolicy(
                self.session.policy.clone(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[session]
policy = "unanimous"
discussion_seconds = 45

[output]
results_file = "out/estimates.json"
snapshot_file = "out/paused.json"
color = false

[repl]
show_progress = false
history_file = "~/.local/share/planning-poker/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.parse_policy(), ResolutionPolicy::Unanimous);
        assert_eq!(config.session.discussion_seconds, 45);
        assert_eq!(config.output.results_file, "out/estimates.json");
        assert!(!config.output.color);
        assert!(!config.repl.show_progress);
        assert!(config.repl.history_file.is_some());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[session]
policy = "unanimous"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.parse_policy(), ResolutionPolicy::Unanimous);
        // Defaults should apply
        assert_eq!(config.session.discussion_seconds, 30);
        assert_eq!(config.output.results_file, "results.json");
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.session.parse_policy(), ResolutionPolicy::Average);
        assert_eq!(config.session.discussion_seconds, 30);
        assert_eq!(config.output.snapshot_file, "snapshot.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_discussion_seconds() {
        let toml_str = r#"
[session]
discussion_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDiscussionSeconds)
        ));
    }

    #[test]
    fn test_validate_unknown_policy() {
        let toml_str = r#"
[session]
policy = "majority"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnknownPolicy(_))
        ));
    }
}
