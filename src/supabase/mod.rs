//! Boundary to the hosted Supabase backend.
//!
//! Every piece of persistence and authentication flows through one configured
//! [`Client`] pointed at the backend base URL and public key. The client exposes
//! the consumed surface only: table reads (filter/order/limit/join), inserts,
//! updates, deletes, counts, and the auth operations (sign-in, sign-up,
//! sign-out, session retrieval). Row-level access control lives server side.

pub mod auth;
pub mod config;
pub mod error;
pub mod query;

pub use auth::{AuthUser, Credentials, CredentialsError, Session};
pub use config::Config;
pub use error::Error;
pub use query::{Order, QueryBuilder};

/// Handle to the backend, carrying the configuration and the access token of
/// the current session (the anon key is used until one exists).
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    access_token: Option<String>,
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            access_token: None,
        }
    }

    /// Attaches the session's access token to subsequent requests.
    pub fn with_access_token(mut self, token: Option<String>) -> Self {
        self.access_token = token;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Starts a query against one table of the data API.
    pub fn from(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.config.clone(), self.bearer(), table)
    }

    fn bearer(&self) -> String {
        self.access_token
            .clone()
            .unwrap_or_else(|| self.config.anon_key.clone())
    }
}
