//! Checklist Configuration
//!
//! Storage prefix, the set of lists, and logging knobs.
//! Every field has a default, so an empty JSON object is a valid config.

use serde::Deserialize;

use crate::domain::{DomainError, DomainResult};

/// One list shown by the app
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListConfig {
    /// Storage name, used in keys such as `<prefix><name>-items`
    pub name: String,
    /// Heading shown above the list
    pub title: String,
}

impl ListConfig {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    pub storage_prefix: String,
    pub lists: Vec<ListConfig>,
    /// Lines kept by the in-memory log buffer
    pub log_capacity: usize,
    pub log_level: String,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            storage_prefix: "sns-".to_string(),
            lists: vec![
                ListConfig::new("selected", "Selected"),
                ListConfig::new("option", "Options"),
            ],
            log_capacity: 200,
            log_level: "info".to_string(),
        }
    }
}

impl ChecklistConfig {
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| DomainError::Malformed {
            key: "config".to_string(),
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.lists.is_empty() {
            return Err(DomainError::InvalidInput("at least one list is required".to_string()));
        }
        for (i, list) in self.lists.iter().enumerate() {
            if list.name.trim().is_empty() {
                return Err(DomainError::InvalidInput(format!("list #{i} has an empty name")));
            }
            if self.lists[..i].iter().any(|l| l.name == list.name) {
                return Err(DomainError::InvalidInput(format!("duplicate list '{}'", list.name)));
            }
        }
        Ok(())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.lists.iter().map(|l| l.name.clone()).collect()
    }
}
