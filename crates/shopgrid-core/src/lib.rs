//! # shopgrid-core: Pure Client Logic for ShopGrid
//!
//! This crate is the heart of the ShopGrid client. Every piece of behavior
//! that does not require I/O lives here as plain functions and types.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ShopGrid Client Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                  Operator Console (apps/console)                │    │
//! │  │    login ──► page commands ──► billing loop ──► alert watch     │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │        shopgrid-session (session store, alert poller)           │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │        shopgrid-api (REST client over reqwest)                  │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │               ★ shopgrid-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌──────────┐ ┌─────────┐ ┌────────┐ ┌─────────┐ ┌─────────┐   │    │
//! │  │   │  types   │ │  money  │ │  cart  │ │ access  │ │ format  │   │    │
//! │  │   │ User     │ │  Money  │ │  Cart  │ │ guard   │ │ backend │   │    │
//! │  │   │ Alert …  │ │ "10.00" │ │ totals │ │ scoping │ │ errors  │   │    │
//! │  │   └──────────┘ └─────────┘ └────────┘ └─────────┘ └─────────┘   │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO NETWORK • NO ASYNC • PURE FUNCTIONS               │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types matching the backend wire format
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Billing cart accumulation and totals
//! - [`format`] - Backend error payload → display string
//! - [`access`] - Route guard and role-based visibility rules
//! - [`validation`] - Local precondition checks
//! - [`error`] - Domain error types

pub mod access;
pub mod cart;
pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

pub use cart::{Cart, CartLine};
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;

/// Default poll interval for the alert poller, in seconds.
///
/// The original console checked for new alerts every 30 seconds; the session
/// runtime uses this as its default and allows configuration overrides.
pub const DEFAULT_ALERT_POLL_SECS: u64 = 30;

/// Delay between a successful sale submission and the follow-up alert recheck.
///
/// Alert generation is asynchronous on the backend relative to the
/// sale-creation response, so an immediate recheck would race it.
pub const POST_SALE_ALERT_RECHECK_SECS: u64 = 1;
