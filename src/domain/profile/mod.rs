//! Profile module - user metadata shown on the profile screen.
//!
//! The profile carries no behaviour the cycle engine depends on. It is kept
//! here only so both shells read and write the same stored shape.

use serde::{Deserialize, Serialize};

/// Name, age and avatar as entered by the user.
///
/// `age` stays free-form text; the form never validated it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub age: String,

    /// Image reference: a file URI on mobile, a data URL on the web.
    #[serde(default, alias = "avatarUrl")]
    pub avatar_uri: Option<String>,
}

impl UserProfile {
    /// Whether nothing has been filled in yet.
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.age.trim().is_empty() && self.avatar_uri.is_none()
    }

    /// Name for display, with the placeholder used when none is set.
    pub fn display_name(&self) -> &str {
        let name = self.name.trim();
        if name.is_empty() {
            "Nama belum diisi"
        } else {
            name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_blank() {
        let profile = UserProfile::default();
        assert!(profile.is_blank());
        assert_eq!(profile.display_name(), "Nama belum diisi");
    }

    #[test]
    fn reads_mobile_shape() {
        let json = r#"{"name":"Sari","age":"24","avatarUri":"file:///a.jpg"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.avatar_uri.as_deref(), Some("file:///a.jpg"));
        assert_eq!(profile.display_name(), "Sari");
    }

    #[test]
    fn reads_web_shape() {
        let json = r#"{"name":"Sari","age":"","avatarUrl":null}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.avatar_uri, None);
        assert!(!profile.is_blank());
    }

    #[test]
    fn writes_avatar_uri_field() {
        let profile = UserProfile {
            name: "Sari".to_string(),
            age: "24".to_string(),
            avatar_uri: None,
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(json, r#"{"name":"Sari","age":"24","avatarUri":null}"#);
    }
}
