//! Decision tables for the resolver.
//!
//! Each `(context, role)` pair maps to an ordered preference list of identity
//! sources. The resolver walks a row left to right and takes the first source
//! that yields a value, then falls back to [`DEFAULT_NAME_CHAIN`] before the
//! terminal configured fallback. Keeping the precedence as data keeps it
//! testable row by row.

use crate::contract::model::{DisplayContext, Role};

/// Text fields a name or initial can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameSource {
    FullName,
    CompanyName,
}

/// Image fields an avatar can come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ImageSource {
    Avatar,
    CompanyLogo,
}

/// Tried after the context row yields nothing, before the terminal fallback.
pub(crate) const DEFAULT_NAME_CHAIN: &[NameSource] =
    &[NameSource::FullName, NameSource::CompanyName];

/// Context-specific name precedence. The global full-name override is applied
/// by the resolver before any of these rows are consulted, so the rows only
/// govern profiles without a usable personal name.
pub(crate) fn name_preference(
    context: DisplayContext,
    role: Option<Role>,
) -> &'static [NameSource] {
    use DisplayContext::*;
    use NameSource::*;
    match (context, role) {
        (Messaging, _) => &[FullName, CompanyName],
        (Marketplace, Some(Role::Supplier | Role::Buyer)) => &[CompanyName, FullName],
        (Marketplace, Some(Role::Admin)) => &[FullName],
        (Marketplace, None) => &[],
        (Profile, Some(Role::Supplier)) => &[CompanyName, FullName],
        (Profile, _) => &[FullName, CompanyName],
        (Navigation, _) => &[FullName, CompanyName],
    }
}

/// Precedence for the one-character badge initial.
pub(crate) fn initial_preference(
    context: DisplayContext,
    role: Option<Role>,
) -> &'static [NameSource] {
    use NameSource::*;
    match (context, role) {
        (DisplayContext::Messaging, _) => &[FullName, CompanyName],
        (_, Some(Role::Supplier)) => &[CompanyName, FullName],
        _ => &[FullName, CompanyName],
    }
}

/// Precedence for the avatar image. Mirrors the name table but swaps in the
/// image fields, and unlike names there is no global override: messaging
/// always leads with the personal photo.
pub(crate) fn image_preference(
    context: DisplayContext,
    role: Option<Role>,
) -> &'static [ImageSource] {
    use DisplayContext::*;
    use ImageSource::*;
    match (context, role) {
        (Messaging, _) => &[Avatar, CompanyLogo],
        (Marketplace, Some(Role::Supplier | Role::Buyer)) => &[CompanyLogo, Avatar],
        (Marketplace, _) => &[Avatar, CompanyLogo],
        (Profile, Some(Role::Supplier)) => &[CompanyLogo, Avatar],
        (Profile, _) => &[Avatar, CompanyLogo],
        (Navigation, Some(Role::Supplier | Role::Buyer)) => &[CompanyLogo, Avatar],
        (Navigation, _) => &[Avatar, CompanyLogo],
    }
}
