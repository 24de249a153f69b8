// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Structured version numbers read from installer filenames

use std::fmt;

use crate::error::ResolveError;
use crate::target::FilenamePattern;

/// A release version extracted from an installer filename.
///
/// The patch level is optional; two-part releases such as "64.0" carry
/// `patch: None` rather than a sentinel value.
///
/// # Examples
/// ```
/// use bvc::version::VersionNumber;
///
/// let version = VersionNumber { major: 64, minor: 0, patch: Some(2) };
/// assert_eq!(version.to_string(), "64.0.2");
///
/// let version = VersionNumber { major: 64, minor: 0, patch: None };
/// assert_eq!(version.to_string(), "64.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionNumber {
    pub major: u32,
    pub minor: u32,
    pub patch: Option<u32>,
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

/// Scan a directory listing for the first entry matching `pattern`.
///
/// Entries are visited strictly in the order the server returned them and
/// scanning stops at the first structural match, even when a later entry
/// would carry a higher version. Entries that fail to yield both a major and
/// a minor number are skipped.
///
/// # Errors
/// Returns [`ResolveError::NotFound`] when the listing is exhausted without
/// a match.
pub fn extract_version(
    listing: &[String],
    pattern: &FilenamePattern,
) -> Result<VersionNumber, ResolveError> {
    listing
        .iter()
        .find_map(|entry| pattern.matches(entry))
        .ok_or(ResolveError::NotFound)
}
