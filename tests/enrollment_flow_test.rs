mod common;

use courseledger::application::auth::AuthGate;
use courseledger::domain::account::Registration;
use courseledger::domain::payment::PaymentDetails;
use courseledger::error::EnrollmentError;
use rust_decimal_macros::dec;

fn card() -> PaymentDetails {
    PaymentDetails::Card {
        number: "4242424242424242".to_string(),
        expiry: "12/26".to_string(),
        cvc: "123".to_string(),
    }
}

/// The whole screen flow in one pass: register, log in, pick courses,
/// check the fees, pay, and end with an empty selection.
#[tokio::test]
async fn test_full_enrollment_flow() {
    use courseledger::infrastructure::in_memory::InMemoryKvStore;

    let store = InMemoryKvStore::new();
    let auth = AuthGate::new(Box::new(store.clone()));
    let engine = courseledger::application::engine::EnrollmentEngine::new(
        Box::new(store),
        courseledger::domain::catalog::Catalog::new(),
    );

    auth.register(Registration {
        username: "alice".to_string(),
        email: "alice@example.com".to_string(),
        password: "secret1".to_string(),
        confirm_password: "secret1".to_string(),
    })
    .await
    .unwrap();
    auth.login("alice", "secret1").await.unwrap();

    engine.toggle_enrollment("First Aid").await.unwrap();
    engine.toggle_enrollment("Cooking").await.unwrap();

    let summary = engine.fee_summary().await.unwrap();
    assert_eq!(summary.total, dec!(2250));

    let receipt = engine.checkout(&card()).await.unwrap();
    assert_eq!(receipt.courses, vec!["First Aid", "Cooking"]);
    assert_eq!(receipt.total, dec!(2250));
    assert_eq!(receipt.method, "Card");

    assert!(engine.selected_courses().await.unwrap().is_empty());
    assert_eq!(engine.fee_summary().await.unwrap().total, dec!(0));
}

#[tokio::test]
async fn test_failed_checkout_preserves_selection() {
    let engine = common::in_memory_engine();
    engine.toggle_enrollment("Sewing").await.unwrap();

    let incomplete = PaymentDetails::Card {
        number: "4242424242424242".to_string(),
        expiry: String::new(),
        cvc: "123".to_string(),
    };
    assert!(matches!(
        engine.checkout(&incomplete).await,
        Err(EnrollmentError::Validation(_))
    ));

    // Selection and total are exactly as before the failed attempt.
    assert_eq!(engine.selected_courses().await.unwrap(), vec!["Sewing"]);
    assert_eq!(engine.fee_summary().await.unwrap().total, dec!(1500));

    // A second attempt with complete details still goes through.
    let receipt = engine.checkout(&card()).await.unwrap();
    assert_eq!(receipt.total, dec!(1500));
}

#[tokio::test]
async fn test_checkout_with_e_wallet() {
    let engine = common::in_memory_engine();
    engine.toggle_enrollment("Garden Maintaining").await.unwrap();

    let receipt = engine
        .checkout(&PaymentDetails::EWallet {
            wallet_id: "0821234567".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(receipt.method, "E-Wallet");
    assert_eq!(receipt.total, dec!(750));
}
