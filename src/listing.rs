// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Anonymous directory listings from the release mirror
//!
//! One [`Mirror::list`] call covers the whole session lifecycle: connect,
//! log in with the public credential-less identity, request the listing,
//! quit. The session is released on every exit path and is never pooled or
//! shared across calls.

use std::io;
use std::net::ToSocketAddrs;
use std::time::Duration;

use log::debug;
use suppaftp::{FtpError, FtpStream};

use crate::error::ResolveError;

/// Host serving the release archive.
pub const RELEASE_HOST: &str = "releases.mozilla.org";

/// Control port of the file transfer service.
pub const FTP_PORT: u16 = 21;

/// Identity used for the credential-less public login.
pub const ANONYMOUS_USER: &str = "Anonymous";

const ANONYMOUS_PASSWORD: &str = "";

/// Time allowed for connection establishment and for each read on the
/// control channel.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A release mirror reachable over an anonymous file transfer session.
///
/// Holds connection parameters only. Every [`list`](Mirror::list) call opens
/// its own session and closes it before returning, so one value can be used
/// from any number of threads at once.
#[derive(Debug, Clone)]
pub struct Mirror {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl Default for Mirror {
    fn default() -> Self {
        Self {
            host: RELEASE_HOST.to_string(),
            port: FTP_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Mirror {
    /// List the raw entry names under `directory`.
    ///
    /// Entries come back exactly as the server reported them, unfiltered and
    /// in server order. A single attempt is made; there is no retry.
    ///
    /// # Errors
    /// [`ResolveError::Connection`] when the host cannot be reached or the
    /// transfer fails, [`ResolveError::Authentication`] when the anonymous
    /// login is rejected.
    pub fn list(&self, directory: &str) -> Result<Vec<String>, ResolveError> {
        let address = (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| self.connection_error(FtpError::ConnectionError(e)))?
            .next()
            .ok_or_else(|| {
                self.connection_error(FtpError::ConnectionError(io::Error::new(
                    io::ErrorKind::NotFound,
                    "host resolved to no addresses",
                )))
            })?;

        debug!("connecting to {address}");
        let mut session = FtpStream::connect_timeout(address, self.timeout)
            .map_err(|e| self.connection_error(e))?;
        let _ = session.get_ref().set_read_timeout(Some(self.timeout));

        if let Err(e) = session.login(ANONYMOUS_USER, ANONYMOUS_PASSWORD) {
            let _ = session.quit();
            return Err(ResolveError::Authentication {
                host: self.host.clone(),
                source: e,
            });
        }
        debug!("logged in as {ANONYMOUS_USER}, listing {directory}");

        // Quit before inspecting the listing result; the session must be
        // released on the failure path too.
        let listing = session.nlst(Some(directory));
        let _ = session.quit();

        listing.map_err(|e| self.connection_error(e))
    }

    fn connection_error(&self, source: FtpError) -> ResolveError {
        ResolveError::Connection {
            host: self.host.clone(),
            source,
        }
    }
}
