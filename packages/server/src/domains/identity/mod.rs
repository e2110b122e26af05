//! Student identity extraction.
//!
//! Questions often embed the asker's own institutional email. When one is
//! present it replaces the configured default so that templated answers
//! (echoed emails, repository URLs) belong to the asker.

use tracing::debug;

use crate::common::patterns::EMAIL_REGEX;
use crate::config::StudentProfile;
use crate::domains::uploads::UploadedFile;

/// Only emails under this domain are accepted as the asker's identity.
pub const INSTITUTIONAL_DOMAIN: &str = "@ds.study.iitm.ac.in";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub email: String,
    pub username: String,
    custom: bool,
}

impl PersonalInfo {
    /// The configured identity.
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            email: profile.email.clone(),
            username: profile.github_username.clone(),
            custom: false,
        }
    }

    /// Identity derived from an institutional email.
    pub fn from_email(email: &str) -> Self {
        let username = email.split('@').next().unwrap_or_default().to_string();
        Self {
            email: email.to_string(),
            username,
            custom: true,
        }
    }

    /// True when the identity came from the question or upload, not config.
    pub fn is_custom(&self) -> bool {
        self.custom
    }
}

/// First institutional email in `text` other than the configured default.
pub fn find_custom_email<'a>(text: &'a str, profile: &StudentProfile) -> Option<&'a str> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|email| *email != profile.email)
        .find(|email| email.ends_with(INSTITUTIONAL_DOMAIN))
}

/// Derive the asker's identity from the question, then the upload, then config.
///
/// An unreadable upload is treated as one without an email.
pub async fn extract(
    question: &str,
    file: Option<&UploadedFile>,
    profile: &StudentProfile,
) -> PersonalInfo {
    if let Some(email) = find_custom_email(question, profile) {
        debug!(email = %email, "Using email found in question");
        return PersonalInfo::from_email(email);
    }

    if let Some(file) = file {
        match file.read_text().await {
            Ok(content) => {
                if let Some(email) = find_custom_email(&content, profile) {
                    debug!(email = %email, "Using email found in uploaded file");
                    return PersonalInfo::from_email(email);
                }
            }
            Err(e) => {
                debug!(error = %e, path = %file.path().display(), "Error reading file for email scan");
            }
        }
    }

    PersonalInfo::from_profile(profile)
}
