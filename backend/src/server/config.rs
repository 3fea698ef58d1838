//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use address_book::domain::UserDirectoryService;
use address_book::domain::ports::UsersQuery;
use address_book::outbound::random_user::RandomUserHttpSource;
use address_book::settings::AppSettings;

/// Everything [`super::create_server`] needs beyond health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UsersQuery>,
}

impl ServerConfig {
    /// Construct a configuration around an existing users query.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, users: Arc<dyn UsersQuery>) -> Self {
        Self { bind_addr, users }
    }

    /// Wire the randomuser adapter and directory service from settings.
    ///
    /// # Errors
    ///
    /// Returns [`std::io::Error`] when a setting does not parse or the HTTP
    /// client cannot be built.
    pub fn from_settings(settings: &AppSettings) -> std::io::Result<Self> {
        let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
        let endpoint = settings.base_url().map_err(std::io::Error::other)?;
        let source = RandomUserHttpSource::new(endpoint, settings.timeout()).map_err(|err| {
            std::io::Error::other(format!("failed to build user source client: {err}"))
        })?;
        let users = UserDirectoryService::new(Arc::new(source), settings.user_batch());
        Ok(Self::new(bind_addr, Arc::new(users)))
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by integration tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
