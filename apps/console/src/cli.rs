//! Command-line surface. One subcommand family per console page.

use clap::{Parser, Subcommand};

use shopgrid_core::money::Money;
use shopgrid_core::types::{AlertSeverity, AlertType, PaymentMethod, Role, TransferStatus};

#[derive(Parser)]
#[command(name = "shopgrid", version, about = "ShopGrid operator console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new account
    Register {
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: Role,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        shop: Option<i64>,
    },
    /// Log out and clear the stored session
    Logout,
    /// Show the current principal
    Whoami,
    /// Shop administration
    #[command(subcommand)]
    Shops(ShopsCommand),
    /// Category administration
    #[command(subcommand)]
    Categories(CategoriesCommand),
    /// Product catalog
    #[command(subcommand)]
    Products(ProductsCommand),
    /// Per-shop stock levels
    #[command(subcommand)]
    Inventory(InventoryCommand),
    /// Interactive point-of-sale cart
    Billing,
    /// Sales history
    #[command(subcommand)]
    Sales(SalesCommand),
    /// Inter-shop stock transfers
    #[command(subcommand)]
    Transfers(TransfersCommand),
    /// User administration (admin only)
    #[command(subcommand)]
    Users(UsersCommand),
    /// Inventory alerts
    #[command(subcommand)]
    Alerts(AlertsCommand),
    /// Summary counts across the system
    Dashboard,
    /// Watch for new alerts until interrupted
    Watch,
}

#[derive(Subcommand)]
pub enum ShopsCommand {
    List,
    Show {
        id: i64,
    },
    Create {
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },
    Update {
        id: i64,
        name: String,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum CategoriesCommand {
    List,
    Create {
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Update {
        id: i64,
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum ProductsCommand {
    List {
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        active: Option<bool>,
    },
    Show {
        id: i64,
    },
    Create {
        name: String,
        #[arg(long)]
        price: Money,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        barcode: Option<String>,
    },
    Update {
        id: i64,
        name: String,
        #[arg(long)]
        price: Money,
        #[arg(long)]
        category: Option<i64>,
        #[arg(long)]
        barcode: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    List {
        #[arg(long)]
        shop: Option<i64>,
        #[arg(long)]
        product: Option<i64>,
        /// Only records below their threshold
        #[arg(long)]
        low: bool,
    },
    Create {
        #[arg(long)]
        shop: i64,
        #[arg(long)]
        product: i64,
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        min_threshold: i64,
        #[arg(long)]
        max_capacity: Option<i64>,
    },
    Update {
        id: i64,
        #[arg(long)]
        quantity: Option<i64>,
        #[arg(long)]
        min_threshold: Option<i64>,
        #[arg(long)]
        max_capacity: Option<i64>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum SalesCommand {
    List {
        #[arg(long)]
        shop: Option<i64>,
        #[arg(long)]
        payment: Option<PaymentMethod>,
        /// Start date, YYYY-MM-DD
        #[arg(long)]
        from: Option<String>,
        /// End date, YYYY-MM-DD
        #[arg(long)]
        to: Option<String>,
    },
    Show {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum TransfersCommand {
    List {
        #[arg(long)]
        status: Option<TransferStatus>,
        #[arg(long)]
        from_shop: Option<i64>,
        #[arg(long)]
        to_shop: Option<i64>,
    },
    Show {
        id: i64,
    },
    /// Request a transfer between two shops
    Request {
        #[arg(long)]
        from_shop: i64,
        #[arg(long)]
        to_shop: i64,
        #[arg(long)]
        product: i64,
        #[arg(long)]
        quantity: i64,
        #[arg(long)]
        notes: Option<String>,
    },
    Approve {
        id: i64,
    },
    Reject {
        id: i64,
    },
    Complete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    List,
    Show {
        id: i64,
    },
    Update {
        id: i64,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        shop: Option<i64>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        active: Option<bool>,
    },
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum AlertsCommand {
    List {
        /// Only unread alerts
        #[arg(long)]
        unread: bool,
        #[arg(long)]
        shop: Option<i64>,
        #[arg(long, value_name = "TYPE")]
        alert_type: Option<AlertType>,
        #[arg(long)]
        severity: Option<AlertSeverity>,
    },
    /// Mark one alert as read
    Read {
        id: i64,
    },
    /// Mark every alert as read
    ReadAll,
}

impl Command {
    /// The console page a command belongs to, for route gating.
    pub fn page_path(&self) -> &'static str {
        match self {
            Command::Login { .. } => "/login",
            Command::Register { .. } => "/register",
            Command::Logout | Command::Whoami => "/dashboard",
            Command::Shops(_) => "/shops",
            Command::Categories(_) => "/categories",
            Command::Products(_) => "/products",
            Command::Inventory(_) => "/inventory",
            Command::Billing => "/billing",
            Command::Sales(_) => "/sales",
            Command::Transfers(_) => "/transfers",
            Command::Users(_) => "/users",
            Command::Alerts(_) => "/alerts",
            Command::Dashboard => "/dashboard",
            Command::Watch => "/alerts",
        }
    }
}
