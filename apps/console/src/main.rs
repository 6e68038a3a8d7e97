//! ShopGrid operator console.
//!
//! Startup sequence:
//! 1. parse arguments and read configuration from the environment;
//! 2. restore any stored session (adopt, then validate against the backend);
//! 3. gate the requested command through the route guard;
//! 4. dispatch, rendering API failures through the shared error formatter.

use clap::Parser;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use shopgrid_core::access::{resolve_route, RouteAction};

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod output;

use cli::{Cli, Command};
use config::Config;
use context::AppContext;
use error::{ConsoleError, ConsoleResult};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shopgrid=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.display_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> ConsoleResult<()> {
    let config = Config::from_env()?;
    debug!(api_url = %config.api_url, "starting");

    let ctx = AppContext::new(config);
    ctx.session.restore().await?;

    match resolve_route(command.page_path(), ctx.session.is_authenticated()) {
        RouteAction::Proceed => commands::dispatch(&ctx, command).await,
        RouteAction::RedirectToLogin => Err(ConsoleError::NotLoggedIn),
        RouteAction::RedirectToDashboard => {
            // Already authenticated; the login gate falls through to the
            // landing page.
            if let Some(user) = ctx.session.current_user() {
                println!("Already logged in as {}.", user.username);
            }
            commands::dispatch(&ctx, Command::Dashboard).await
        }
    }
}
