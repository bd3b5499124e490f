//! User entity - a registered account identified by phone number

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// User entity. Authentication resolves a phone number, so the phone
/// number is the lookup key alongside the primary id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    pub phone_number: String,
    pub nickname: String,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: Snowflake, phone_number: String, nickname: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            phone_number,
            nickname,
            profile_image: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update the nickname
    pub fn set_nickname(&mut self, nickname: String) {
        self.nickname = nickname;
        self.updated_at = Utc::now();
    }

    /// Update the profile image
    pub fn set_profile_image(&mut self, profile_image: Option<String>) {
        self.profile_image = profile_image;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(
            Snowflake::new(1),
            "01012345678".to_string(),
            "tester".to_string(),
        );
        assert_eq!(user.phone_number, "01012345678");
        assert_eq!(user.nickname, "tester");
        assert!(user.profile_image.is_none());
    }

    #[test]
    fn test_set_nickname_touches_updated_at() {
        let mut user = User::new(
            Snowflake::new(1),
            "01012345678".to_string(),
            "tester".to_string(),
        );
        let before = user.updated_at;
        user.set_nickname("renamed".to_string());
        assert_eq!(user.nickname, "renamed");
        assert!(user.updated_at >= before);
    }
}
