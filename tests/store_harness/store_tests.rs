//! Macro-generated test suite for `AccountStore` contract validation.
//!
//! # Generated Tests
//!
//! - `test_find_credit_seeded` — both seed accounts are found with their credit
//! - `test_find_credit_unknown_card` — a card differing only by CVV → None
//! - `test_find_credit_requires_exact_date` — `"1"` does not match `"01"`
//! - `test_update_credit_persists` — update then find returns the new credit
//! - `test_update_credit_isolated` — other accounts keep their credit
//! - `test_update_credit_unknown_card` — no error, nothing changes
//! - `test_update_credit_fractional` — fractional credits survive a round-trip

#[macro_export]
macro_rules! account_store_tests {
    ($store_factory:expr) => {
        mod account_store_tests {
            use super::*;
            use card_order::core::AccountStore;
            use std::sync::Arc;

            async fn make_store() -> Arc<dyn AccountStore> {
                Arc::new($store_factory)
            }

            #[tokio::test]
            async fn test_find_credit_seeded() {
                let store = make_store().await;
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
                assert_eq!(
                    credit_of(&store, &secondary_card()).await,
                    Some(SECONDARY_CREDIT)
                );
            }

            #[tokio::test]
            async fn test_find_credit_unknown_card() {
                let store = make_store().await;
                let mut card = primary_card();
                card.cvv = "444".to_string();
                assert_eq!(credit_of(&store, &card).await, None);
            }

            #[tokio::test]
            async fn test_find_credit_requires_exact_date() {
                let store = make_store().await;
                let mut card = primary_card();
                card.date.month = "1".to_string();
                assert_eq!(credit_of(&store, &card).await, None);
            }

            #[tokio::test]
            async fn test_update_credit_persists() {
                let store = make_store().await;
                store.update_credit(&primary_card(), 270.0).await.unwrap();
                assert_eq!(credit_of(&store, &primary_card()).await, Some(270.0));
            }

            #[tokio::test]
            async fn test_update_credit_isolated() {
                let store = make_store().await;
                store.update_credit(&primary_card(), 1.0).await.unwrap();
                assert_eq!(
                    credit_of(&store, &secondary_card()).await,
                    Some(SECONDARY_CREDIT)
                );
            }

            #[tokio::test]
            async fn test_update_credit_unknown_card() {
                let store = make_store().await;
                let mut card = primary_card();
                card.numbers = "0000000000000000".to_string();
                store.update_credit(&card, 1.0).await.unwrap();
                assert_eq!(credit_of(&store, &card).await, None);
                assert_eq!(credit_of(&store, &primary_card()).await, Some(PRIMARY_CREDIT));
            }

            #[tokio::test]
            async fn test_update_credit_fractional() {
                let store = make_store().await;
                store.update_credit(&primary_card(), 299.75).await.unwrap();
                assert_eq!(credit_of(&store, &primary_card()).await, Some(299.75));
            }
        }
    };
}
