//! # Billing Cart
//!
//! In-memory accumulation of selected products into line items, plus the
//! order totals computed before a sale is submitted.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Billing Cart Lifecycle                           │
//! │                                                                         │
//! │  ┌──────────┐  add_product   ┌──────────┐  into_sale_request  ┌──────┐  │
//! │  │  Empty   │───────────────►│  Lines   │────────────────────►│ POST │  │
//! │  │  Cart    │                │  + form  │                     │/sales│  │
//! │  └──────────┘                └──────────┘                     └──────┘  │
//! │       ▲                        │                                  │     │
//! │       │      clear()           │ update_quantity / remove         │     │
//! │       └────────────────────────┴──────────────────────────────────┘     │
//! │                                                      (success clears)   │
//! │                                                                         │
//! │  INVARIANTS                                                             │
//! │  • Lines are unique by product id (re-adding merges quantities)         │
//! │  • quantity < 1 never exists: update_quantity(.., 0) removes the line   │
//! │  • unit_price is frozen at add time; catalog changes never touch it     │
//! │  • Failed submissions never mutate cart state                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{NewSale, NewSaleItem, PaymentMethod, Product};

/// One product-quantity-price tuple in an unsubmitted sale.
///
/// Client-only and ephemeral: never persisted, destroyed on submit or clear.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product id this line refers to.
    pub product_id: i64,

    /// Product name at add time, for display.
    pub name: String,

    /// Quantity, always >= 1.
    pub quantity: i64,

    /// Price snapshot captured when the line was created. Later catalog
    /// price changes must not retroactively alter an open cart.
    pub unit_price: Money,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            quantity: 1,
            unit_price: product.unit_price,
        }
    }

    /// Line total: quantity × frozen unit price.
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// The billing cart with its order-level form fields.
///
/// Discount and tax are free-entry amounts (not derived from a rate table);
/// both are validated non-negative at entry, but the computed total is not
/// clamped - the backend is the final arbiter.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    pub lines: Vec<CartLine>,
    pub discount: Money,
    pub tax: Money,
    pub payment_method: Option<PaymentMethod>,
    pub notes: String,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product: merges into an existing line (quantity +1) or appends
    /// a new quantity-1 line with the current unit price frozen in.
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == product.id)
        {
            line.quantity += 1;
            return;
        }
        self.lines.push(CartLine::from_product(product));
    }

    /// Sets a line's quantity exactly. A quantity below 1 is equivalent to
    /// removal.
    pub fn update_quantity(&mut self, product_id: i64, quantity: i64) -> CoreResult<()> {
        if quantity < 1 {
            return self.remove(product_id);
        }
        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(CoreError::ProductNotInCart(product_id)),
        }
    }

    /// Deletes a line entirely.
    pub fn remove(&mut self, product_id: i64) -> CoreResult<()> {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() == before {
            Err(CoreError::ProductNotInCart(product_id))
        } else {
            Ok(())
        }
    }

    /// Empties the cart and resets the form fields.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.discount = Money::zero();
        self.tax = Money::zero();
        self.notes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Σ(quantity × unit price) over all lines.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(|l| l.line_total()).sum()
    }

    /// `subtotal − discount + tax`, unclamped.
    pub fn total(&self) -> Money {
        self.subtotal() - self.discount + self.tax
    }

    /// Packages the cart into a sale-creation payload.
    ///
    /// Local preconditions (checked before any network call):
    /// - a shop must be selected (`shop_id` is `Some`);
    /// - the cart must be non-empty.
    ///
    /// The cart itself is untouched; callers clear it only after the backend
    /// accepts the sale.
    pub fn to_sale_request(&self, shop_id: Option<i64>) -> CoreResult<NewSale> {
        let shop = shop_id.ok_or(CoreError::NoShopSelected)?;
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        Ok(NewSale {
            shop,
            items: self
                .lines
                .iter()
                .map(|l| NewSaleItem {
                    product: l.product_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                })
                .collect(),
            discount: self.discount,
            tax: self.tax,
            payment_method: self.payment_method.unwrap_or(PaymentMethod::Cash),
            notes: self.notes.clone(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: &str) -> Product {
        Product {
            id,
            name: format!("Product {id}"),
            category: None,
            category_name: None,
            unit_price: price.parse().unwrap(),
            barcode: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn adding_same_product_twice_merges_into_one_line() {
        let mut cart = Cart::new();
        let p = product(1, "10.00");

        cart.add_product(&p);
        cart.add_product(&p);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
        assert_eq!(cart.lines[0].unit_price, Money::from_cents(1000));
        assert_eq!(cart.subtotal(), Money::from_cents(2000));
    }

    #[test]
    fn totals_follow_subtotal_minus_discount_plus_tax() {
        let mut cart = Cart::new();
        let p = product(1, "10.00");
        cart.add_product(&p);
        cart.add_product(&p);
        cart.discount = Money::from_cents(500);
        cart.tax = Money::from_cents(200);

        assert_eq!(cart.subtotal(), Money::from_cents(2000));
        assert_eq!(cart.total(), Money::from_cents(1700));
    }

    #[test]
    fn negative_totals_are_not_clamped() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "1.00"));
        cart.discount = Money::from_cents(500);

        assert_eq!(cart.total(), Money::from_cents(-400));
    }

    #[test]
    fn quantity_zero_removes_the_line() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00"));
        cart.add_product(&product(2, "3.00"));

        cart.update_quantity(1, 0).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert!(cart.lines.iter().all(|l| l.product_id != 1));
    }

    #[test]
    fn update_quantity_sets_exactly() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "5.00"));

        cart.update_quantity(1, 7).unwrap();
        assert_eq!(cart.lines[0].quantity, 7);
        assert_eq!(cart.subtotal(), Money::from_cents(3500));
    }

    #[test]
    fn update_unknown_product_is_an_error() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.update_quantity(42, 3),
            Err(CoreError::ProductNotInCart(42))
        ));
        assert!(matches!(cart.remove(42), Err(CoreError::ProductNotInCart(42))));
    }

    #[test]
    fn price_snapshot_survives_catalog_changes() {
        let mut cart = Cart::new();
        let mut p = product(1, "10.00");
        cart.add_product(&p);

        // Catalog price change after the line exists
        p.unit_price = "99.00".parse().unwrap();
        cart.update_quantity(1, 2).unwrap();

        assert_eq!(cart.subtotal(), Money::from_cents(2000));
    }

    #[test]
    fn submit_requires_shop_and_non_empty_cart() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.to_sale_request(Some(1)),
            Err(CoreError::EmptyCart)
        ));

        cart.add_product(&product(1, "10.00"));
        assert!(matches!(
            cart.to_sale_request(None),
            Err(CoreError::NoShopSelected)
        ));

        let req = cart.to_sale_request(Some(3)).unwrap();
        assert_eq!(req.shop, 3);
        assert_eq!(req.items.len(), 1);
        assert_eq!(req.items[0].unit_price, Money::from_cents(1000));
        // Failed/successful packaging leaves the cart untouched
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn clear_resets_lines_and_form_fields() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, "10.00"));
        cart.discount = Money::from_cents(100);
        cart.tax = Money::from_cents(50);
        cart.notes = "gift".to_string();

        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.discount.is_zero());
        assert!(cart.tax.is_zero());
        assert!(cart.notes.is_empty());
    }
}
