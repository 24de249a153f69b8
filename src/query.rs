// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Input validation for version lookups
//!
//! This module turns the raw browser, operating system and locale
//! identifiers a caller supplies into a validated, immutable
//! [`VersionQuery`]. Validation runs before any network activity.

use crate::error::ResolveError;

/// Locale used when the caller does not name one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Browsers whose releases can be looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Firefox,
}

impl BrowserKind {
    /// Canonical display name for this browser.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            BrowserKind::Firefox => "Firefox",
        }
    }

    /// Parse a raw browser identifier, case-insensitively.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnsupportedBrowser`] for any identifier
    /// outside the supported set.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        if input.eq_ignore_ascii_case("firefox") {
            Ok(BrowserKind::Firefox)
        } else {
            Err(ResolveError::UnsupportedBrowser(input.to_string()))
        }
    }
}

/// Operating systems the release mirror publishes installers for.
///
/// Each variant knows its canonical display label and the path segment the
/// mirror uses for its release directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatingSystem {
    Windows,
    MacOsX,
}

impl OperatingSystem {
    /// Canonical display name for this operating system.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "Windows",
            OperatingSystem::MacOsX => "Mac OS X",
        }
    }

    /// Path segment used by the mirror for this operating system.
    #[must_use]
    pub fn release_segment(self) -> &'static str {
        match self {
            OperatingSystem::Windows => "win32",
            OperatingSystem::MacOsX => "mac",
        }
    }

    /// Parse a raw operating system identifier.
    ///
    /// Accepts the common spellings of each name, case-insensitively.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnsupportedOperatingSystem`] for any
    /// identifier outside the supported set.
    pub fn parse(input: &str) -> Result<Self, ResolveError> {
        match input.to_ascii_lowercase().as_str() {
            "windows" | "win" | "win32" => Ok(OperatingSystem::Windows),
            "macosx" | "mac os x" | "macos" | "mac" | "osx" => Ok(OperatingSystem::MacOsX),
            _ => Err(ResolveError::UnsupportedOperatingSystem(input.to_string())),
        }
    }
}

/// A validated lookup request.
///
/// Constructed once per lookup and never mutated afterwards; every stage
/// receives the same value. Construction fails unless both the browser and
/// the operating system are supported.
///
/// # Examples
/// ```
/// use bvc::query::{OperatingSystem, VersionQuery};
///
/// let query = VersionQuery::validate("firefox", None, None).unwrap();
/// assert_eq!(query.os, OperatingSystem::Windows);
/// assert_eq!(query.language, "en");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionQuery {
    pub browser: BrowserKind,
    pub os: OperatingSystem,
    pub language: String,
}

impl VersionQuery {
    /// Validate raw identifiers into a query.
    ///
    /// The operating system defaults to Windows and the language to
    /// [`DEFAULT_LANGUAGE`] when absent. The language is not checked against
    /// a known-locale list; any non-empty value is taken verbatim, and an
    /// empty value counts as absent.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnsupportedBrowser`] or
    /// [`ResolveError::UnsupportedOperatingSystem`] for identifiers outside
    /// the supported sets.
    pub fn validate(
        browser: &str,
        os: Option<&str>,
        language: Option<&str>,
    ) -> Result<Self, ResolveError> {
        let browser = BrowserKind::parse(browser)?;
        let os = match os {
            Some(value) => OperatingSystem::parse(value)?,
            None => OperatingSystem::Windows,
        };
        let language = match language {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => DEFAULT_LANGUAGE.to_string(),
        };
        Ok(Self {
            browser,
            os,
            language,
        })
    }
}
