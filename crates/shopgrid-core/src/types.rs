//! # Domain Types
//!
//! Client-side copies of the backend's wire entities.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐                │
//! │  │     User      │  │     Shop      │  │    Product    │                │
//! │  │  ───────────  │  │  ───────────  │  │  ───────────  │                │
//! │  │  id, username │  │  id, name     │  │  id, name     │                │
//! │  │  role         │  │  address      │  │  category     │                │
//! │  │  shop (ref)   │  │  is_active    │  │  unit_price   │                │
//! │  └───────────────┘  └───────────────┘  └───────────────┘                │
//! │                                                                         │
//! │  ┌───────────────┐  ┌───────────────┐  ┌───────────────┐                │
//! │  │     Stock     │  │   Sale/Item   │  │ Transfer/Alert│                │
//! │  │  quantity     │  │  amounts as   │  │  status and   │                │
//! │  │  is_low_stock │  │  Money        │  │  severity     │                │
//! │  │  (server-side)│  │  snapshots    │  │  enums        │                │
//! │  └───────────────┘  └───────────────┘  └───────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Conventions
//! - Field names are snake_case, exactly as the backend serializes them.
//! - Ids are integers. Money fields are decimal strings (see [`crate::money`]).
//! - Read-only annotation fields (`shop_name`, `product_name`, ...) are
//!   optional strings and default to `None` when the backend omits them.
//! - Derived inventory flags (`is_low_stock`, `is_out_of_stock`) are computed
//!   server-side and trusted as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Shop Reference
// =============================================================================

/// Normalized reference to a shop.
///
/// The backend is inconsistent about `user.shop`: depending on the endpoint it
/// is either a bare id or an embedded object. This type normalizes both
/// representations into a single id at the deserialization boundary, so
/// downstream code never branches on the shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ShopRef(#[ts(type = "number")] i64);

impl ShopRef {
    /// Creates a reference from a shop id.
    #[inline]
    pub const fn new(id: i64) -> Self {
        ShopRef(id)
    }

    /// Returns the shop id.
    #[inline]
    pub const fn id(&self) -> i64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for ShopRef {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Id(i64),
            Embedded { id: i64 },
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::Id(id) | Wire::Embedded { id } => ShopRef(id),
        })
    }
}

// =============================================================================
// Principal
// =============================================================================

/// User role, gating which actions and pages are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Admin,
    SalesManager,
    Staff,
}

impl Role {
    /// Shop-bound roles are pinned to their assigned shop: sales and
    /// inventory views only show that shop and the billing shop selector is
    /// locked to it.
    pub fn is_shop_bound(&self) -> bool {
        matches!(self, Role::SalesManager | Role::Staff)
    }

    /// Only admins administer users and shops.
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::SalesManager => "sales_manager",
            Role::Staff => "staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "sales_manager" => Ok(Role::SalesManager),
            "staff" => Ok(Role::Staff),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: "admin, sales_manager, staff".to_string(),
            }),
        }
    }
}

/// The authenticated principal as known to the client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    /// Assigned shop; bare id or embedded object on the wire, always an id
    /// here.
    #[serde(default)]
    pub shop: Option<ShopRef>,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// The assigned shop id, if any.
    pub fn shop_id(&self) -> Option<i64> {
        self.shop.map(|s| s.id())
    }
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Catalog
// =============================================================================

/// A retail shop.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Shop {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A catalog product.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub unit_price: Money,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Inventory
// =============================================================================

/// A per-shop stock record.
///
/// `is_low_stock` and `is_out_of_stock` are derived server-side from
/// `quantity` vs `min_threshold`; the client renders them without recomputing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stock {
    pub id: i64,
    pub shop: i64,
    #[serde(default)]
    pub shop_name: Option<String>,
    pub product: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub product_price: Option<Money>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub quantity: i64,
    pub min_threshold: i64,
    #[serde(default)]
    pub max_capacity: Option<i64>,
    #[serde(default)]
    pub is_low_stock: bool,
    #[serde(default)]
    pub is_out_of_stock: bool,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Sales
// =============================================================================

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum PaymentMethod {
    Cash,
    Card,
    Upi,
    Other,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::Other => "other",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "card" => Ok(PaymentMethod::Card),
            "upi" => Ok(PaymentMethod::Upi),
            "other" => Ok(PaymentMethod::Other),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "payment_method".to_string(),
                allowed: "cash, card, upi, other".to_string(),
            }),
        }
    }
}

/// One line of a recorded sale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleItem {
    pub id: i64,
    pub product: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_price: Money,
    pub subtotal: Money,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A completed sale. Immutable from the client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Sale {
    pub id: i64,
    pub shop: i64,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub staff: Option<i64>,
    #[serde(default)]
    pub staff_name: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<DateTime<Utc>>,
    pub total_amount: Money,
    pub discount: Money,
    pub tax: Money,
    pub final_amount: Money,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub items: Vec<SaleItem>,
    #[serde(default)]
    pub item_count: Option<i64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for creating a sale from the billing cart.
///
/// Unit prices are the cart's add-time snapshots, submitted as-is; the
/// backend recomputes totals authoritatively.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSale {
    pub shop: i64,
    pub items: Vec<NewSaleItem>,
    pub discount: Money,
    pub tax: Money,
    pub payment_method: PaymentMethod,
    pub notes: String,
}

/// One line of a sale-creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewSaleItem {
    pub product: i64,
    pub quantity: i64,
    pub unit_price: Money,
}

// =============================================================================
// Transfers
// =============================================================================

/// Transfer workflow state. Transitions are backend-owned; the client only
/// invokes them and re-renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TransferStatus {
    Pending,
    Approved,
    Rejected,
    Completed,
    Cancelled,
}

impl TransferStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferStatus::Pending => "pending",
            TransferStatus::Approved => "approved",
            TransferStatus::Rejected => "rejected",
            TransferStatus::Completed => "completed",
            TransferStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TransferStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransferStatus {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(TransferStatus::Pending),
            "approved" => Ok(TransferStatus::Approved),
            "rejected" => Ok(TransferStatus::Rejected),
            "completed" => Ok(TransferStatus::Completed),
            "cancelled" => Ok(TransferStatus::Cancelled),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: "pending, approved, rejected, completed, cancelled".to_string(),
            }),
        }
    }
}

/// An inter-shop stock transfer request.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transfer {
    pub id: i64,
    pub from_shop: i64,
    #[serde(default)]
    pub from_shop_name: Option<String>,
    pub to_shop: i64,
    #[serde(default)]
    pub to_shop_name: Option<String>,
    pub product: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub status: TransferStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub requested_by: Option<i64>,
    #[serde(default)]
    pub requested_by_username: Option<String>,
    #[serde(default)]
    pub approved_by: Option<i64>,
    #[serde(default)]
    pub approved_by_username: Option<String>,
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Payload for requesting a transfer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewTransfer {
    pub from_shop: i64,
    pub to_shop: i64,
    pub product: i64,
    pub quantity: i64,
    #[serde(default)]
    pub notes: Option<String>,
}

// =============================================================================
// Alerts
// =============================================================================

/// Backend-generated inventory alert categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AlertType {
    LowStock,
    StockoutRisk,
    HighDemand,
    Seasonal,
}

impl AlertType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertType::LowStock => "low_stock",
            AlertType::StockoutRisk => "stockout_risk",
            AlertType::HighDemand => "high_demand",
            AlertType::Seasonal => "seasonal",
        }
    }
}

impl FromStr for AlertType {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low_stock" => Ok(AlertType::LowStock),
            "stockout_risk" => Ok(AlertType::StockoutRisk),
            "high_demand" => Ok(AlertType::HighDemand),
            "seasonal" => Ok(AlertType::Seasonal),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "alert_type".to_string(),
                allowed: "low_stock, stockout_risk, high_demand, seasonal".to_string(),
            }),
        }
    }
}

/// Alert urgency. Variant order is significant: derived `Ord` ranks
/// `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertSeverity {
    type Err = crate::error::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(AlertSeverity::Low),
            "medium" => Ok(AlertSeverity::Medium),
            "high" => Ok(AlertSeverity::High),
            "critical" => Ok(AlertSeverity::Critical),
            _ => Err(crate::error::ValidationError::NotAllowed {
                field: "severity".to_string(),
                allowed: "low, medium, high, critical".to_string(),
            }),
        }
    }
}

/// An inventory condition alert.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Alert {
    pub id: i64,
    pub shop: ShopRef,
    #[serde(default)]
    pub shop_name: Option<String>,
    #[serde(default)]
    pub product: Option<i64>,
    #[serde(default)]
    pub product_name: Option<String>,
    pub alert_type: AlertType,
    pub message: String,
    pub severity: AlertSeverity,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_by: Option<i64>,
    #[serde(default)]
    pub read_by_username: Option<String>,
    #[serde(default)]
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_ref_accepts_bare_id_and_embedded_object() {
        let bare: ShopRef = serde_json::from_str("3").unwrap();
        assert_eq!(bare.id(), 3);

        let embedded: ShopRef =
            serde_json::from_str(r#"{"id": 3, "name": "Main Street", "is_active": true}"#).unwrap();
        assert_eq!(embedded.id(), 3);

        // Always serializes back to the bare id
        assert_eq!(serde_json::to_string(&embedded).unwrap(), "3");
    }

    #[test]
    fn user_deserializes_with_either_shop_shape() {
        let with_id: User = serde_json::from_str(
            r#"{"id":1,"username":"alice","email":"a@x.io","role":"staff","shop":2}"#,
        )
        .unwrap();
        assert_eq!(with_id.shop_id(), Some(2));
        assert_eq!(with_id.role, Role::Staff);

        let with_object: User = serde_json::from_str(
            r#"{"id":1,"username":"alice","role":"sales_manager","shop":{"id":7,"name":"North"}}"#,
        )
        .unwrap();
        assert_eq!(with_object.shop_id(), Some(7));
        assert!(with_object.role.is_shop_bound());

        let unassigned: User =
            serde_json::from_str(r#"{"id":9,"username":"root","role":"admin","shop":null}"#)
                .unwrap();
        assert_eq!(unassigned.shop_id(), None);
        assert!(unassigned.role.is_admin());
    }

    #[test]
    fn product_parses_decimal_price() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"name":"Cola 330ml","category":4,"category_name":"Drinks",
                "unit_price":"10.00","barcode":"5449000000996","is_active":true}"#,
        )
        .unwrap();
        assert_eq!(p.unit_price, Money::from_cents(1000));
    }

    #[test]
    fn stock_trusts_server_side_flags() {
        let s: Stock = serde_json::from_str(
            r#"{"id":1,"shop":2,"shop_name":"Main","product":3,"product_name":"Cola",
                "quantity":2,"min_threshold":5,"max_capacity":null,
                "is_low_stock":true,"is_out_of_stock":false}"#,
        )
        .unwrap();
        assert!(s.is_low_stock);
        assert!(!s.is_out_of_stock);
        assert_eq!(s.max_capacity, None);
    }

    #[test]
    fn alert_wire_shape() {
        let a: Alert = serde_json::from_str(
            r#"{"id":12,"shop":3,"shop_name":"Main Street","product":5,
                "product_name":"Cola 330ml","alert_type":"low_stock","severity":"high",
                "message":"Low stock for Cola 330ml","is_read":false,
                "created_at":"2024-06-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(a.alert_type, AlertType::LowStock);
        assert_eq!(a.severity, AlertSeverity::High);
        assert_eq!(a.shop.id(), 3);
    }

    #[test]
    fn severity_orders_by_urgency() {
        assert!(AlertSeverity::Critical > AlertSeverity::High);
        assert!(AlertSeverity::High > AlertSeverity::Medium);
        assert!(AlertSeverity::Medium > AlertSeverity::Low);
    }

    #[test]
    fn new_sale_serializes_decimal_strings() {
        let payload = NewSale {
            shop: 1,
            items: vec![NewSaleItem {
                product: 2,
                quantity: 3,
                unit_price: Money::from_cents(1050),
            }],
            discount: Money::from_cents(500),
            tax: Money::from_cents(200),
            payment_method: PaymentMethod::Cash,
            notes: String::new(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["items"][0]["unit_price"], "10.50");
        assert_eq!(json["discount"], "5.00");
        assert_eq!(json["payment_method"], "cash");
    }
}
