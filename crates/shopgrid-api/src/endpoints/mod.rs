//! Typed endpoint groups, one per backend app.
//!
//! Handles are cheap borrows of the shared [`crate::ApiClient`]; every call
//! awaits a single request and maps the outcome through the client's status
//! handling. List calls take a filter struct that flattens into query pairs.

mod alerts;
mod auth;
mod categories;
mod inventory;
mod products;
mod sales;
mod shops;
mod transfers;
mod users;

pub use alerts::{AlertFilter, Alerts};
pub use auth::{Auth, AuthResponse, LoginRequest, RegisterRequest};
pub use categories::{Categories, CategoryPayload};
pub use inventory::{Inventory, NewStock, StockFilter, StockUpdate};
pub use products::{ProductFilter, ProductPayload, Products};
pub use sales::{SaleFilter, Sales};
pub use shops::{ShopPayload, Shops};
pub use transfers::{TransferFilter, Transfers};
pub use users::{UserUpdate, Users};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ApiClient;
    use crate::transport::StubTransport;
    use serde_json::json;
    use shopgrid_core::types::{AlertSeverity, TransferStatus};
    use std::sync::Arc;

    fn client_with_stub() -> (ApiClient, Arc<StubTransport>) {
        let stub = Arc::new(StubTransport::new());
        let client = ApiClient::with_transport("http://test.local/api", stub.clone());
        (client, stub)
    }

    #[test]
    fn filters_flatten_to_query_pairs() {
        let filter = AlertFilter {
            is_read: Some(false),
            shop_id: Some(2),
            alert_type: None,
            severity: Some(AlertSeverity::High),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("is_read", "false".to_string()),
                ("shop_id", "2".to_string()),
                ("severity", "high".to_string()),
            ]
        );

        let filter = TransferFilter {
            status: Some(TransferStatus::Pending),
            from_shop_id: None,
            to_shop_id: Some(4),
        };
        assert_eq!(
            filter.to_query(),
            vec![
                ("status", "pending".to_string()),
                ("to_shop_id", "4".to_string()),
            ]
        );

        assert!(ProductFilter::default().to_query().is_empty());
    }

    #[tokio::test]
    async fn login_decodes_user_and_token_pair() {
        let (client, stub) = client_with_stub();
        stub.push(
            200,
            json!({
                "user": {"id": 1, "username": "alice", "role": "staff", "shop": 2},
                "access": "tok",
                "refresh": "rtok"
            }),
        );

        let response = client
            .auth()
            .login(&LoginRequest {
                username: "alice".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.access, "tok");
        assert_eq!(response.user.shop_id(), Some(2));

        let req = stub.last_request().unwrap();
        assert_eq!(req.url, "http://test.local/api/auth/login/");
        assert_eq!(req.body.unwrap()["username"], "alice");
    }

    #[tokio::test]
    async fn transfer_actions_post_to_action_paths() {
        let (client, stub) = client_with_stub();
        stub.push(
            200,
            json!({
                "id": 7, "from_shop": 1, "to_shop": 2, "product": 3,
                "quantity": 5, "status": "approved"
            }),
        );

        let transfer = client.transfers().approve(7).await.unwrap();
        assert_eq!(transfer.status, TransferStatus::Approved);

        let req = stub.last_request().unwrap();
        assert_eq!(req.url, "http://test.local/api/transfers/7/approve/");
        assert!(req.body.is_none());
    }

    #[tokio::test]
    async fn mark_all_read_puts_without_body() {
        let (client, stub) = client_with_stub();
        stub.push(200, json!({"marked": 4}));

        client.alerts().mark_all_read().await.unwrap();

        let req = stub.last_request().unwrap();
        assert_eq!(req.method.as_str(), "PUT");
        assert_eq!(req.url, "http://test.local/api/alerts/mark-all-read/");
    }
}
