//! Command handlers, one module per console page.
//!
//! Every handler follows the same shape: local precondition checks, one or
//! more API calls, a rendered table or confirmation line. Route gating and
//! session restore happen in `main` before dispatch.

pub mod alerts;
pub mod auth;
pub mod billing;
pub mod catalog;
pub mod dashboard;
pub mod inventory;
pub mod sales;
pub mod shops;
pub mod transfers;
pub mod users;
pub mod watch;

use crate::cli::Command;
use crate::context::AppContext;
use crate::error::ConsoleResult;

pub async fn dispatch(ctx: &AppContext, command: Command) -> ConsoleResult<()> {
    match command {
        Command::Login { username, password } => auth::login(ctx, &username, &password).await,
        Command::Register {
            username,
            email,
            password,
            role,
            phone,
            shop,
        } => auth::register(ctx, &username, &email, &password, role, phone, shop).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx),
        Command::Shops(cmd) => shops::run(ctx, cmd).await,
        Command::Categories(cmd) => catalog::run_categories(ctx, cmd).await,
        Command::Products(cmd) => catalog::run_products(ctx, cmd).await,
        Command::Inventory(cmd) => inventory::run(ctx, cmd).await,
        Command::Billing => billing::run(ctx).await,
        Command::Sales(cmd) => sales::run(ctx, cmd).await,
        Command::Transfers(cmd) => transfers::run(ctx, cmd).await,
        Command::Users(cmd) => users::run(ctx, cmd).await,
        Command::Alerts(cmd) => alerts::run(ctx, cmd).await,
        Command::Dashboard => dashboard::run(ctx).await,
        Command::Watch => watch::run(ctx).await,
    }
}
