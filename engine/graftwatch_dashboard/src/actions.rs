use graftwatch_risk::AlertLevel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionPriority {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionItem {
    pub action: String,
    pub priority: ActionPriority,
}

impl ActionItem {
    fn new(action: &str, priority: ActionPriority) -> Self {
        Self {
            action: action.to_string(),
            priority,
        }
    }
}

/// Clinical follow-up suggested for a monitoring status
pub fn recommended_actions(level: AlertLevel) -> Vec<ActionItem> {
    use ActionPriority::*;

    match level {
        AlertLevel::Critical => vec![
            ActionItem::new("Schedule immediate biopsy procedure", Critical),
            ActionItem::new("Contact patient for emergency consultation", Critical),
            ActionItem::new("Adjust immunosuppressant dosage", Warning),
        ],
        AlertLevel::Warning => vec![
            ActionItem::new("Increase monitoring to twice weekly", Warning),
            ActionItem::new("Schedule follow-up within 48 hours", Warning),
            ActionItem::new("Review medication adherence", Info),
        ],
        AlertLevel::Stable => vec![
            ActionItem::new("Continue routine monthly monitoring", Info),
            ActionItem::new("Schedule next routine checkup", Info),
        ],
    }
}
