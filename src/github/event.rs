use std::path::Path;

use anyhow::Context;
use valq::query_value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Labeled,
    Unlabeled,
    Other(String),
}

impl From<&str> for Action {
    fn from(action: &str) -> Self {
        match action {
            "labeled" => Action::Labeled,
            "unlabeled" => Action::Unlabeled,
            other => Action::Other(other.to_string()),
        }
    }
}

/// The fields of a webhook delivery that decide what a run does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPayload {
    pub sender_type: Option<String>,
    pub issue_number: Option<u64>,
    pub action: Action,
    pub label_name: Option<String>,
}

impl EventPayload {
    pub fn from_json(event: &serde_json::Value) -> Self {
        let sender_type = query_value!(event.sender["type"] -> str).map(str::to_string);
        // Issue numbers start at 1; GitHub never sends 0 for a real issue.
        let issue_number = query_value!(event.issue.number -> u64).filter(|number| *number > 0);
        let action: Action = query_value!(event.action -> str).unwrap_or_default().into();
        let label_name = query_value!(event.label.name -> str).map(str::to_string);

        Self {
            sender_type,
            issue_number,
            action,
            label_name,
        }
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        let event: serde_json::Value = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse event payload {}", path.display()))?;
        Ok(Self::from_json(&event))
    }

    pub fn is_bot(&self) -> bool {
        self.sender_type.as_deref() == Some("Bot")
    }
}
