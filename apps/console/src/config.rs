//! Console configuration from environment variables.
//!
//! | Variable                   | Default                          |
//! |----------------------------|----------------------------------|
//! | `SHOPGRID_API_URL`         | `http://127.0.0.1:8000/api`      |
//! | `SHOPGRID_DATA_DIR`        | platform app-data directory      |
//! | `SHOPGRID_ALERT_POLL_SECS` | 30                               |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;

use crate::error::{ConsoleError, ConsoleResult};
use shopgrid_core::DEFAULT_ALERT_POLL_SECS;

const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API.
    pub api_url: String,
    /// Directory holding the durable session file.
    pub data_dir: PathBuf,
    /// Interval between alert checks in watch mode.
    pub poll_interval: Duration,
}

impl Config {
    pub fn from_env() -> ConsoleResult<Self> {
        let api_url = env::var("SHOPGRID_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let data_dir = match env::var("SHOPGRID_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => ProjectDirs::from("com", "shopgrid", "shopgrid")
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or_else(|| {
                    ConsoleError::Config(
                        "no app-data directory available; set SHOPGRID_DATA_DIR".to_string(),
                    )
                })?,
        };

        let poll_secs = match env::var("SHOPGRID_ALERT_POLL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                ConsoleError::Config(format!("SHOPGRID_ALERT_POLL_SECS is not a number: {raw}"))
            })?,
            Err(_) => DEFAULT_ALERT_POLL_SECS,
        };

        Ok(Config {
            api_url,
            data_dir,
            poll_interval: Duration::from_secs(poll_secs),
        })
    }

    pub fn session_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }
}
