//! Command line and environment configuration for the server binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::domain::ServiceOptions;
use crate::storage::connection::DEFAULT_DATABASE_URL;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "People directory REST server")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "PEOPLE_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    #[arg(long, env = "PEOPLE_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    #[arg(long, env = "PEOPLE_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Allowed CORS origin; any origin when unset
    #[arg(long, env = "PEOPLE_CORS_ORIGIN")]
    pub cors_origin: Option<String>,

    /// Built frontend to serve for unmatched paths
    #[arg(long, env = "PEOPLE_FRONTEND_DIR", default_value = "frontend/dist")]
    pub frontend_dir: PathBuf,

    /// Load the demo dataset when the server starts
    #[arg(long, env = "PEOPLE_SEED_ON_STARTUP", default_value_t = true, action = ArgAction::Set)]
    pub seed_on_startup: bool,

    /// Validate person fields on create as well as on update
    #[arg(long, env = "PEOPLE_VALIDATE_ON_CREATE", default_value_t = false, action = ArgAction::Set)]
    pub validate_on_create: bool,

    #[arg(long, env = "PEOPLE_NODE_LINK_PREFIX", default_value = "/person")]
    pub node_link_prefix: String,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, env = "PEOPLE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            validate_on_create: self.validate_on_create,
            node_link_prefix: self.node_link_prefix.clone(),
        }
    }
}
