use mentionkit_engine::{MentionError, MentionPartType, PartType, PatternPartType, Suggestion, TextStyle};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Trigger #{index}: `{trigger}` must be exactly one character")]
    InvalidTrigger { index: usize, trigger: String },

    #[error("Trigger #{index}: set exactly one of `trigger` or `pattern`")]
    AmbiguousTrigger { index: usize },

    #[error("Trigger #{index}: {source}")]
    InvalidPattern { index: usize, source: MentionError },
}

/// One entry of `[[triggers]]`: either a mention trigger or a highlight pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default)]
    pub insert_space_after_mention: bool,
    #[serde(default = "default_allowed_spaces_count")]
    pub allowed_spaces_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub bold: bool,
}

fn default_allowed_spaces_count() -> usize {
    MentionPartType::DEFAULT_ALLOWED_SPACES_COUNT
}

fn default_debounce_ms() -> u64 {
    100
}

impl TriggerConfig {
    pub fn mention(trigger: char) -> Self {
        Self {
            trigger: Some(trigger.to_string()),
            pattern: None,
            insert_space_after_mention: false,
            allowed_spaces_count: default_allowed_spaces_count(),
            color: None,
            bold: false,
        }
    }

    fn style(&self) -> TextStyle {
        TextStyle {
            color: self.color.clone(),
            bold: self.bold,
        }
    }

    fn to_part_type(&self, index: usize) -> Result<PartType, ConfigError> {
        match (&self.trigger, &self.pattern) {
            (Some(trigger), None) => {
                let mut chars = trigger.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(ConfigError::InvalidTrigger {
                        index,
                        trigger: trigger.clone(),
                    });
                };
                Ok(PartType::Mention(
                    MentionPartType::new(c)
                        .with_style(self.style())
                        .insert_space_after_mention(self.insert_space_after_mention)
                        .allowed_spaces(self.allowed_spaces_count),
                ))
            }
            (None, Some(pattern)) => {
                let pattern = PatternPartType::new(pattern)
                    .map_err(|source| ConfigError::InvalidPattern { index, source })?;
                Ok(PartType::Pattern(pattern.with_style(self.style())))
            }
            _ => Err(ConfigError::AmbiguousTrigger { index }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Idle time before the suggestion list refreshes.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Part types in parse priority order.
    #[serde(default)]
    pub triggers: Vec<TriggerConfig>,
    /// Candidates offered by the suggestion list.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

impl Default for Config {
    fn default() -> Self {
        let people = [
            "John Doe",
            "Alice Smith",
            "Michael Johnson",
            "Emily Brown",
            "David Williams",
            "Sarah Jones",
            "Matthew Martinez",
            "Jennifer Taylor",
            "Christopher Anderson",
        ];

        Self {
            debounce_ms: default_debounce_ms(),
            triggers: vec![TriggerConfig {
                insert_space_after_mention: true,
                color: Some("cyan".to_string()),
                ..TriggerConfig::mention('@')
            }],
            suggestions: people
                .iter()
                .enumerate()
                .map(|(i, name)| Suggestion::new((i + 1).to_string(), *name))
                .collect(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mentionkit");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied config path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Builds the engine's part types, validating every entry.
    pub fn part_types(&self) -> Result<Vec<PartType>, ConfigError> {
        self.triggers
            .iter()
            .enumerate()
            .map(|(index, trigger)| trigger.to_part_type(index))
            .collect()
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
