#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::OnceLock,
};

/// Environment variable that overrides the address the server binds.
pub const ADDR_ENV_VAR: &str = "GRADEPLAN_ADDR";

/// Port the server binds when nothing is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Runtime server settings resolved from the environment, if provided.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    bind: SocketAddr,
}

impl ServerConfig {
    /// Builds the settings from environment-provided values, falling back to
    /// loopback on the default port when the variable is unset or does not
    /// parse as `host:port`.
    fn from_env() -> Self {
        let bind = match std::env::var(ADDR_ENV_VAR) {
            Ok(raw) => match raw.trim().parse() {
                Ok(addr) => addr,
                Err(_) => {
                    tracing::warn!(
                        "Could not parse {ADDR_ENV_VAR}=`{raw}` as host:port, using the default \
                         address"
                    );
                    default_addr()
                }
            },
            Err(_) => default_addr(),
        };

        Self { bind }
    }

    /// Returns the address the HTTP listener binds to.
    pub fn bind(&self) -> SocketAddr {
        self.bind
    }
}

/// The loopback fallback address.
fn default_addr() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, DEFAULT_PORT))
}

/// Returns the process-wide server settings, resolving them on first use.
pub fn server_config() -> &'static ServerConfig {
    static CONFIG: OnceLock<ServerConfig> = OnceLock::new();
    CONFIG.get_or_init(ServerConfig::from_env)
}
