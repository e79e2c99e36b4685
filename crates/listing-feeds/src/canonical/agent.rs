use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalAgent {
    pub name: String,
    pub email: String,
    /// International form with a leading `+`, or empty when the feed had none.
    pub phone: String,
    pub photo: String,
}

/// Strips spaces and prefixes `+` when the number lacks one.
pub fn normalize_phone(raw: &str) -> String {
    let compact: String = raw.chars().filter(|ch| !ch.is_whitespace()).collect();
    if compact.is_empty() || compact.starts_with('+') {
        compact
    } else {
        format!("+{compact}")
    }
}
