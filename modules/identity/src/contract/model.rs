use serde::{Deserialize, Serialize};

/// Profile record as supplied by the profile data source.
///
/// Every field is optional: profiles created through the signup flow start
/// out mostly empty and are filled in over time. `full_name` may also hold
/// the signup placeholder (`"New User"` by default), which the resolver
/// treats the same as no name at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub full_name: Option<String>,
    pub company_name: Option<String>,
    pub avatar_url: Option<String>,
    pub company_logo_url: Option<String>,
    /// Present in the upstream record but never used for display.
    pub email: Option<String>,
}

/// Marketplace role of the viewed account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supplier,
    Buyer,
}

/// Which screen is asking for the identity. Controls whether the personal
/// or the company identity takes precedence when both exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayContext {
    Marketplace,
    Messaging,
    Profile,
    #[default]
    Navigation,
}
