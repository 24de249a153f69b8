// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Mapping from a validated query to a mirror location
//!
//! Resolution is a pure function of the query: it derives the directory to
//! list on the mirror and the installer filename shape to look for in that
//! listing. No I/O happens here.

use crate::error::ResolveError;
use crate::query::{BrowserKind, OperatingSystem, VersionQuery};
use crate::version::VersionNumber;

/// Directory on the mirror that always points at the newest release.
pub const RELEASES_ROOT: &str = "/pub/mozilla.org/firefox/releases/latest";

/// Shape of an installer filename: a fixed prefix, a `major.minor[.patch]`
/// version, and a fixed suffix.
///
/// Matching is structural rather than regex-based; a successful match
/// returns the parsed [`VersionNumber`] directly.
///
/// # Examples
/// ```
/// use bvc::target::FilenamePattern;
///
/// let pattern = FilenamePattern::new("Firefox Setup ", ".exe");
/// let version = pattern.matches("Firefox Setup 64.0.2.exe").unwrap();
/// assert_eq!(version.to_string(), "64.0.2");
/// assert!(pattern.matches("SHA512SUMS").is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilenamePattern {
    prefix: &'static str,
    suffix: &'static str,
}

impl FilenamePattern {
    #[must_use]
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    /// Try to read a version out of `filename`.
    ///
    /// The prefix may begin anywhere in the entry, so listings that report
    /// full paths match as well. Returns `None` unless at least a major and
    /// minor number sit between the prefix and the suffix.
    #[must_use]
    pub fn matches(&self, filename: &str) -> Option<VersionNumber> {
        for (start, _) in filename.match_indices(self.prefix) {
            let rest = &filename[start + self.prefix.len()..];
            if let Some(version) = self.match_version(rest) {
                return Some(version);
            }
        }
        None
    }

    fn match_version(&self, rest: &str) -> Option<VersionNumber> {
        let (major, rest) = take_number(rest)?;
        let (minor, rest) = take_number(rest.strip_prefix('.')?)?;

        // A third number directly before the suffix is the patch level.
        if let Some((patch, tail)) = rest.strip_prefix('.').and_then(take_number) {
            if tail.starts_with(self.suffix) {
                return Some(VersionNumber {
                    major,
                    minor,
                    patch: Some(patch),
                });
            }
        }

        rest.starts_with(self.suffix).then_some(VersionNumber {
            major,
            minor,
            patch: None,
        })
    }
}

/// Read a leading run of ASCII digits, returning the value and the rest.
fn take_number(s: &str) -> Option<(u32, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// The directory to list on the mirror and the installer shape to look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteTarget {
    pub directory: String,
    pub pattern: FilenamePattern,
}

impl RemoteTarget {
    /// Derive the mirror location for a query.
    ///
    /// Pure and deterministic; identical queries yield identical targets.
    ///
    /// # Errors
    /// Returns [`ResolveError::UnsupportedOperatingSystem`] if a browser and
    /// operating system pair has no installer mapping. Every pair accepted
    /// by [`VersionQuery::validate`] currently has one, and the exhaustive
    /// match below forces this mapping to be revisited when a variant is
    /// added.
    ///
    /// # Examples
    /// ```
    /// use bvc::query::VersionQuery;
    /// use bvc::target::RemoteTarget;
    ///
    /// let query = VersionQuery::validate("firefox", Some("windows"), Some("de")).unwrap();
    /// let target = RemoteTarget::resolve(&query).unwrap();
    /// assert_eq!(target.directory, "/pub/mozilla.org/firefox/releases/latest/win32/de");
    /// ```
    pub fn resolve(query: &VersionQuery) -> Result<Self, ResolveError> {
        let pattern = match (query.browser, query.os) {
            (BrowserKind::Firefox, OperatingSystem::Windows) => {
                FilenamePattern::new("Firefox Setup ", ".exe")
            }
            (BrowserKind::Firefox, OperatingSystem::MacOsX) => {
                FilenamePattern::new("Firefox ", ".dmg")
            }
        };
        let directory = format!(
            "{RELEASES_ROOT}/{}/{}",
            query.os.release_segment(),
            query.language
        );
        Ok(Self { directory, pattern })
    }
}
