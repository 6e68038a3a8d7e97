//! # Access Rules
//!
//! Route gating and role-based visibility, as pure functions over the
//! current principal.
//!
//! ## Route Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Route Guard                                    │
//! │                                                                         │
//! │  requested path      no principal          principal present            │
//! │  ──────────────      ────────────          ─────────────────            │
//! │  /login, /register   Proceed               RedirectToDashboard          │
//! │  anything else       RedirectToLogin       Proceed                      │
//! │                                                                         │
//! │  The guard is a pure function of (path, authenticated). Callers must    │
//! │  re-evaluate it on every principal change - immediately after logout    │
//! │  the page being viewed must redirect away.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{Role, Shop, User};

/// Paths reachable without a principal.
const PUBLIC_PATHS: &[&str] = &["/login", "/register"];

/// Path of the post-login landing page.
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Path of the login gate.
pub const LOGIN_PATH: &str = "/login";

/// Outcome of evaluating the route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAction {
    /// Navigation may proceed to the requested path.
    Proceed,
    /// Unauthenticated access to a protected page.
    RedirectToLogin,
    /// Authenticated access to the login/register gate.
    RedirectToDashboard,
}

/// Evaluates the route guard for a requested path.
///
/// No side effects beyond the returned decision.
pub fn resolve_route(path: &str, authenticated: bool) -> RouteAction {
    let public = PUBLIC_PATHS.contains(&path);
    match (public, authenticated) {
        (true, true) => RouteAction::RedirectToDashboard,
        (false, false) => RouteAction::RedirectToLogin,
        _ => RouteAction::Proceed,
    }
}

// =============================================================================
// Role-Scoped Visibility
// =============================================================================

/// Shops visible to a principal.
///
/// Shop-bound roles (staff, sales_manager) with an assignment see exactly
/// their shop; everyone else sees the full list. Every page that filters by
/// assignment uses this one function.
pub fn available_shops<'a>(user: &User, shops: &'a [Shop]) -> Vec<&'a Shop> {
    match pinned_shop_id(user) {
        Some(id) => shops.iter().filter(|s| s.id == id).collect(),
        None => shops.iter().collect(),
    }
}

/// The shop a principal is pinned to, if their role pins them at all.
///
/// When this returns `Some`, the billing shop selector is fixed to that shop
/// and not editable.
pub fn pinned_shop_id(user: &User) -> Option<i64> {
    if user.role.is_shop_bound() {
        user.shop_id()
    } else {
        None
    }
}

/// Whether the principal may administer users and shops.
pub fn can_manage_users(role: Role) -> bool {
    role.is_admin()
}

/// Whether the principal may approve, reject, or complete transfers.
pub fn can_manage_transfers(role: Role) -> bool {
    matches!(role, Role::Admin | Role::SalesManager)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShopRef;

    fn user(role: Role, shop: Option<i64>) -> User {
        User {
            id: 1,
            username: "u".to_string(),
            email: None,
            role,
            phone: None,
            shop: shop.map(ShopRef::new),
            shop_name: None,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    fn shop(id: i64) -> Shop {
        Shop {
            id,
            name: format!("Shop {id}"),
            address: None,
            phone: None,
            email: None,
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn unauthenticated_dashboard_redirects_to_login() {
        assert_eq!(resolve_route("/dashboard", false), RouteAction::RedirectToLogin);
        assert_eq!(resolve_route("/billing", false), RouteAction::RedirectToLogin);
    }

    #[test]
    fn authenticated_login_redirects_to_dashboard() {
        assert_eq!(resolve_route("/login", true), RouteAction::RedirectToDashboard);
        assert_eq!(resolve_route("/register", true), RouteAction::RedirectToDashboard);
    }

    #[test]
    fn matching_states_proceed() {
        assert_eq!(resolve_route("/login", false), RouteAction::Proceed);
        assert_eq!(resolve_route("/dashboard", true), RouteAction::Proceed);
    }

    #[test]
    fn sales_manager_sees_only_the_assigned_shop() {
        let shops = vec![shop(1), shop(2), shop(3)];
        let manager = user(Role::SalesManager, Some(3));

        let visible = available_shops(&manager, &shops);
        assert_eq!(visible.iter().map(|s| s.id).collect::<Vec<_>>(), vec![3]);
        assert_eq!(pinned_shop_id(&manager), Some(3));
    }

    #[test]
    fn admin_sees_every_shop_and_is_not_pinned() {
        let shops = vec![shop(1), shop(2)];
        let admin = user(Role::Admin, Some(1));

        assert_eq!(available_shops(&admin, &shops).len(), 2);
        assert_eq!(pinned_shop_id(&admin), None);
    }

    #[test]
    fn unassigned_staff_sees_the_full_list_but_stays_unpinned() {
        // No assignment yet: nothing to pin to; submission still fails the
        // shop precondition elsewhere.
        let shops = vec![shop(1), shop(2)];
        let staff = user(Role::Staff, None);

        assert_eq!(available_shops(&staff, &shops).len(), 2);
        assert_eq!(pinned_shop_id(&staff), None);
    }

    #[test]
    fn permission_helpers() {
        assert!(can_manage_users(Role::Admin));
        assert!(!can_manage_users(Role::SalesManager));
        assert!(can_manage_transfers(Role::SalesManager));
        assert!(!can_manage_transfers(Role::Staff));
    }
}
