use serde::{Deserialize, Serialize};

/// Configuration for the identity module
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    /// Name the signup flow writes before the user picks one; treated as
    /// "no name provided". Compared case-insensitively after trimming.
    #[serde(default = "default_placeholder_name")]
    pub placeholder_name: String,
    /// Shown when no usable name exists on the profile.
    #[serde(default = "default_fallback_name")]
    pub fallback_name: String,
    /// Shown in avatar badges when no usable initial exists.
    #[serde(default = "default_fallback_initial")]
    pub fallback_initial: char,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            placeholder_name: default_placeholder_name(),
            fallback_name: default_fallback_name(),
            fallback_initial: default_fallback_initial(),
        }
    }
}

fn default_placeholder_name() -> String {
    "New User".to_string()
}

fn default_fallback_name() -> String {
    "Account".to_string()
}

fn default_fallback_initial() -> char {
    'A'
}
