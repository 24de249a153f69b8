// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Error taxonomy for version lookups
//!
//! Every failure a lookup can produce is one of these variants, surfaced to
//! the caller exactly as the failing stage raised it. No stage catches and
//! re-wraps another stage's error.

use thiserror::Error;

/// Errors returned by [`get`](crate::get) and the individual lookup stages.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The requested browser is not one of the supported browsers.
    #[error("unsupported browser: {0}")]
    UnsupportedBrowser(String),

    /// The requested operating system is not one of the supported systems.
    #[error("unsupported operating system: {0}")]
    UnsupportedOperatingSystem(String),

    /// The release host could not be reached, or the transfer failed after
    /// the session was established.
    #[error("unable to connect to {host}: {source}")]
    Connection {
        host: String,
        #[source]
        source: suppaftp::FtpError,
    },

    /// The release host rejected the anonymous login.
    #[error("unable to log in to {host}: {source}")]
    Authentication {
        host: String,
        #[source]
        source: suppaftp::FtpError,
    },

    /// The directory listing was retrieved but no entry matched the expected
    /// installer name.
    #[error("no installer matching the expected name was found")]
    NotFound,
}
