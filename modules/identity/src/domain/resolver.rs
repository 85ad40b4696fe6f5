use tracing::{instrument, trace};

use crate::config::IdentityConfig;
use crate::contract::model::{DisplayContext, Profile, Role};
use crate::domain::name;
use crate::domain::rules::{self, ImageSource, NameSource};

/// Context-aware identity resolution.
///
/// All three operations are pure and total: missing or unusable data falls
/// through to the next source and terminates at a configured fallback, never
/// an error. A broken display beats a crashed page for these helpers, so the
/// fallbacks (`"Account"`, `'A'`, `None`) are ordinary outputs, not
/// sentinels.
#[derive(Debug, Clone, Default)]
pub struct DisplayResolver {
    config: IdentityConfig,
}

impl DisplayResolver {
    pub fn new(config: IdentityConfig) -> Self {
        Self { config }
    }

    /// Resolve the name to show for `profile` on the given screen.
    ///
    /// A usable personal name wins in every context and for every role; the
    /// context/role table only decides what happens when the profile has no
    /// usable `full_name`. The email address is never consulted.
    #[instrument(
        name = "identity.resolver.display_name",
        level = "trace",
        skip(self, profile),
        fields(context = ?context, role = ?role)
    )]
    pub fn display_name(
        &self,
        profile: Option<&Profile>,
        role: Option<Role>,
        context: DisplayContext,
    ) -> String {
        let Some(profile) = profile else {
            return self.config.fallback_name.clone();
        };

        // Global override: a valid full name pre-empts every context rule.
        if let Some(personal) = self.formatted_full_name(profile) {
            return personal;
        }

        let row = rules::name_preference(context, role);
        for source in row.iter().chain(rules::DEFAULT_NAME_CHAIN) {
            if let Some(resolved) = self.name_from(profile, *source) {
                return resolved;
            }
        }

        trace!("no usable name on profile, using fallback");
        self.config.fallback_name.clone()
    }

    /// One-character badge initial, uppercased, defaulting to the configured
    /// fallback (`'A'`).
    pub fn fallback_initial(
        &self,
        profile: Option<&Profile>,
        role: Option<Role>,
        context: DisplayContext,
    ) -> char {
        let Some(profile) = profile else {
            return self.config.fallback_initial;
        };

        for source in rules::initial_preference(context, role) {
            if let Some(initial) = self.initial_from(profile, *source) {
                return initial;
            }
        }
        self.config.fallback_initial
    }

    /// Avatar or company logo URL for the given screen, or `None`.
    ///
    /// Unlike the name path this does no trimming or blank-checking: the
    /// upstream record either carries a URL or it carries null, and an empty
    /// string is passed through as-is.
    pub fn display_image<'a>(
        &self,
        profile: Option<&'a Profile>,
        role: Option<Role>,
        context: DisplayContext,
    ) -> Option<&'a str> {
        let profile = profile?;

        for source in rules::image_preference(context, role) {
            let url = match source {
                ImageSource::Avatar => profile.avatar_url.as_deref(),
                ImageSource::CompanyLogo => profile.company_logo_url.as_deref(),
            };
            if url.is_some() {
                return url;
            }
        }
        None
    }

    /// Shortened personal name, if the profile carries a usable one.
    fn formatted_full_name(&self, profile: &Profile) -> Option<String> {
        let raw = profile.full_name.as_deref()?;
        if !name::is_valid_name(raw, &self.config.placeholder_name) {
            return None;
        }
        name::format_display_name(raw).or_else(|| Some(raw.trim().to_string()))
    }

    fn name_from(&self, profile: &Profile, source: NameSource) -> Option<String> {
        match source {
            NameSource::FullName => self.formatted_full_name(profile),
            NameSource::CompanyName => {
                let company = profile.company_name.as_deref()?.trim();
                (!company.is_empty()).then(|| company.to_string())
            }
        }
    }

    fn initial_from(&self, profile: &Profile, source: NameSource) -> Option<char> {
        match source {
            NameSource::FullName => {
                let raw = profile.full_name.as_deref()?;
                if !name::is_valid_name(raw, &self.config.placeholder_name) {
                    return None;
                }
                name::leading_initial(raw)
            }
            NameSource::CompanyName => name::leading_initial(profile.company_name.as_deref()?),
        }
    }
}
