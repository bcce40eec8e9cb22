// Server configuration
//
// Flags fall back to EMPLOYEE_* environment variables, then to defaults.

use clap::{ArgAction, Parser};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_DATABASE: &str = "employees.db";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Listen address
    pub addr: SocketAddr,
    /// SQLite file backing the document store (`:memory:` for a throwaway store)
    pub database: PathBuf,
    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            database: PathBuf::from(DEFAULT_DATABASE),
            cors: true,
        }
    }
}

/// Command line of the API server
#[derive(Parser, Debug)]
#[command(name = "employee-server", version, about = "Employee CRUD REST API")]
pub struct ServerArgs {
    /// Address to listen on
    #[arg(long, env = "EMPLOYEE_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Database file
    #[arg(long, env = "EMPLOYEE_DB", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Disable the CORS layer
    #[arg(long, env = "EMPLOYEE_NO_CORS", action = ArgAction::SetTrue)]
    pub no_cors: bool,

    /// Debug level logging for this crate
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl ServerArgs {
    pub fn into_config(self) -> ServerConfig {
        ServerConfig {
            addr: self.addr,
            database: self.database,
            cors: !self.no_cors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const ENV_VARS: [&str; 3] = ["EMPLOYEE_ADDR", "EMPLOYEE_DB", "EMPLOYEE_NO_CORS"];

    // Tests that read or write EMPLOYEE_* run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_match() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let args = ServerArgs::try_parse_from(["employee-server"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.into_config(), ServerConfig::default());
    }

    #[test]
    fn test_env_fallbacks() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("EMPLOYEE_ADDR", "127.0.0.1:9090");
        std::env::set_var("EMPLOYEE_DB", "/tmp/staff.db");
        std::env::set_var("EMPLOYEE_NO_CORS", "true");

        let from_env = ServerArgs::try_parse_from(["employee-server"]).map(ServerArgs::into_config);

        // Flags still win over the environment
        let from_flags =
            ServerArgs::try_parse_from(["employee-server", "--database", "flag.db"])
                .map(ServerArgs::into_config);
        clear_env();

        let config = from_env.unwrap();
        assert_eq!(config.addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database, PathBuf::from("/tmp/staff.db"));
        assert!(!config.cors);

        let config = from_flags.unwrap();
        assert_eq!(config.database, PathBuf::from("flag.db"));
        assert_eq!(config.addr, "127.0.0.1:9090".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_flags() {
        let args = ServerArgs::try_parse_from([
            "employee-server",
            "--addr",
            "127.0.0.1:8080",
            "--database",
            ":memory:",
            "--no-cors",
            "-v",
        ])
        .unwrap();

        assert!(args.verbose);
        let config = args.into_config();
        assert_eq!(config.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.database, PathBuf::from(":memory:"));
        assert!(!config.cors);
    }

    #[test]
    fn test_bad_addr_rejected() {
        let result = ServerArgs::try_parse_from(["employee-server", "--addr", "not-an-address"]);
        assert!(result.is_err());
    }
}
