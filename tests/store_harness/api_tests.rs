//! Macro-generated HTTP suite for `POST /order/process` over any backend.
//!
//! # Generated Tests
//!
//! - `test_accept_debits_credit` — 200 "Payment accepted", credit 300 → 270
//! - `test_sequential_accepts` — two orders of 30 leave 240
//! - `test_refuse_above_credit` — 200 "Payment refused", credit unchanged
//! - `test_refuse_equal_to_credit` — the full credit is refused
//! - `test_unknown_card` — 404 "No matching card", credit unchanged
//! - `test_invalid_payload_leaves_store_untouched` — 400 before any lookup
//! - `test_accounts_are_independent` — debiting one account leaves the other

#[macro_export]
macro_rules! order_api_tests {
    ($store_factory:expr) => {
        mod order_api_tests {
            use super::*;
            use axum::http::StatusCode;
            use card_order::core::AccountStore;
            use serde_json::json;
            use std::sync::Arc;

            async fn make_store() -> Arc<dyn AccountStore> {
                Arc::new($store_factory)
            }

            #[tokio::test]
            async fn test_accept_debits_credit() {
                let store = make_store().await;
                let server = test_server(store.clone());

                let response = server.post("/order/process").json(&valid_order(30.0)).await;

                response.assert_status(StatusCode::OK);
                response.assert_text("Payment accepted");
                assert_eq!(credit_of(&store, &primary_card()).await, Some(270.0));
            }

            #[tokio::test]
            async fn test_sequential_accepts() {
                let store = make_store().await;
                let server = test_server(store.clone());

                for _ in 0..2 {
                    server
                        .post("/order/process")
                        .json(&valid_order(30.0))
                        .await
                        .assert_text("Payment accepted");
                }

                assert_eq!(credit_of(&store, &primary_card()).await, Some(240.0));
            }

            #[tokio::test]
            async fn test_refuse_above_credit() {
                let store = make_store().await;
                let server = test_server(store.clone());

                let response = server.post("/order/process").json(&valid_order(3000.0)).await;

                response.assert_status(StatusCode::OK);
                response.assert_text("Payment refused, the amount is too high");
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }

            #[tokio::test]
            async fn test_refuse_equal_to_credit() {
                let store = make_store().await;
                let server = test_server(store.clone());

                let response = server
                    .post("/order/process")
                    .json(&valid_order(PRIMARY_CREDIT))
                    .await;

                response.assert_status(StatusCode::OK);
                response.assert_text("Payment refused, the amount is too high");
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }

            #[tokio::test]
            async fn test_unknown_card() {
                let store = make_store().await;
                let server = test_server(store.clone());
                let mut card = primary_card();
                card.cvv = "444".to_string();

                let response = server
                    .post("/order/process")
                    .json(&order_payload(&card, 30.0))
                    .await;

                response.assert_status(StatusCode::NOT_FOUND);
                response.assert_text("No matching card");
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }

            #[tokio::test]
            async fn test_invalid_payload_leaves_store_untouched() {
                let store = make_store().await;
                let server = test_server(store.clone());
                let mut payload = valid_order(30.0);
                payload["amount"] = json!("30");

                let response = server.post("/order/process").json(&payload).await;

                response.assert_status(StatusCode::BAD_REQUEST);
                response.assert_json(&json!(["instance.amount is not of a type(s) number"]));
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }

            #[tokio::test]
            async fn test_accounts_are_independent() {
                let store = make_store().await;
                let server = test_server(store.clone());

                server
                    .post("/order/process")
                    .json(&order_payload(&secondary_card(), 20.0))
                    .await
                    .assert_text("Payment accepted");

                assert_eq!(credit_of(&store, &secondary_card()).await, Some(30.0));
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }
        }
    };
}
