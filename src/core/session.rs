use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ImageRef;

/// Display name used when sign-in leaves the name blank
pub const DEFAULT_DISPLAY_NAME: &str = "User";

/// The signed-in user of this store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub display_name: String,

    /// Identity key used for progress and leaderboard records
    pub email: String,

    pub join_date: DateTime<Utc>,

    #[serde(default)]
    pub photo: Option<ImageRef>,
}

impl UserSession {
    pub fn new(display_name: &str, email: &str, join_date: DateTime<Utc>) -> Self {
        let display_name = display_name.trim();
        Self {
            display_name: if display_name.is_empty() {
                DEFAULT_DISPLAY_NAME.to_string()
            } else {
                display_name.to_string()
            },
            email: email.trim().to_string(),
            join_date,
            photo: None,
        }
    }

    pub fn identity(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_defaults() {
        let session = UserSession::new("   ", " alice@example.com ", Utc::now());
        assert_eq!(session.display_name, DEFAULT_DISPLAY_NAME);
        assert_eq!(session.identity(), "alice@example.com");
    }
}
