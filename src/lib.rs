// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Browser Version Check Library
//!
//! This library answers one question: what is the newest released version of
//! a browser for a given operating system and locale. It does so by listing
//! the public release mirror's `latest` directory over an anonymous file
//! transfer session and reading the version out of the installer filename
//! found there.
//!
//! A lookup runs in four stages, each in its own module:
//! - [`query`]: validate the requested browser, operating system and locale
//! - [`target`]: map the query to a mirror directory and installer shape
//! - [`listing`]: fetch the directory listing over one anonymous session
//! - [`version`]: read a structured version from the first matching entry
//!
//! Each stage either succeeds or fails with one variant of
//! [`ResolveError`]; the first failure ends the lookup and is returned to
//! the caller unchanged.

pub mod error;
pub mod listing;
pub mod query;
pub mod target;
pub mod version;

// Re-export commonly used items at the crate root for convenience
pub use error::ResolveError;
pub use listing::Mirror;
pub use query::{BrowserKind, DEFAULT_LANGUAGE, OperatingSystem, VersionQuery};
pub use target::{FilenamePattern, RemoteTarget};
pub use version::{VersionNumber, extract_version};

/// Look up the latest release for an already validated query.
///
/// # Errors
/// Propagates the failure of whichever stage broke first, unchanged.
pub fn resolve_latest(
    mirror: &Mirror,
    query: &VersionQuery,
) -> Result<VersionNumber, ResolveError> {
    let target = RemoteTarget::resolve(query)?;
    log::debug!("release directory: {}", target.directory);
    let listing = mirror.list(&target.directory)?;
    log::debug!("mirror returned {} entries", listing.len());
    extract_version(&listing, &target.pattern)
}

/// Look up the latest release version of `browser`, rendered as a string.
///
/// `os` defaults to Windows and `language` to "en" when absent. The result
/// is "major.minor" or "major.minor.patch" depending on what the installer
/// filename carried.
///
/// # Errors
/// One of the five [`ResolveError`] kinds; unsupported inputs fail before
/// any network activity.
pub fn get(browser: &str, os: Option<&str>, language: Option<&str>) -> Result<String, ResolveError> {
    get_with(&Mirror::default(), browser, os, language)
}

/// Same as [`get`], against a specific mirror (another host, port or
/// timeout).
///
/// # Errors
/// One of the five [`ResolveError`] kinds; unsupported inputs fail before
/// any network activity.
pub fn get_with(
    mirror: &Mirror,
    browser: &str,
    os: Option<&str>,
    language: Option<&str>,
) -> Result<String, ResolveError> {
    let query = VersionQuery::validate(browser, os, language)?;
    Ok(resolve_latest(mirror, &query)?.to_string())
}
