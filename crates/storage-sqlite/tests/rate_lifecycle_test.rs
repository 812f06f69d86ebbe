mod common;

use rust_decimal_macros::dec;

use cambio_core::errors::Error;
use cambio_core::rates::{NewRate, RateError, RateUpdate};

#[tokio::test]
async fn every_rate_mutation_appends_a_history_snapshot() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let rate = ctx.rate_service.get_active_rate("USD").unwrap();

    // Creation already produced the first snapshot.
    let history = ctx.rate_service.get_rate_history(&rate.id).unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].price, dec!(7300));
    assert_eq!(history[0].buy_rate, dec!(7200));
    assert_eq!(history[0].sell_rate, dec!(7400));

    let updated = ctx
        .rate_service
        .update_rate(RateUpdate {
            id: rate.id.clone(),
            price: Some(dec!(7350)),
            buy_commission: None,
            sell_commission: Some(dec!(150)),
        })
        .await
        .unwrap();
    assert_eq!(updated.price, dec!(7350));

    let history = ctx.rate_service.get_rate_history(&rate.id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].price, dec!(7350));
    assert_eq!(history[1].buy_rate, dec!(7250));
    assert_eq!(history[1].sell_rate, dec!(7500));
}

#[tokio::test]
async fn a_noop_update_writes_no_snapshot() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;
    let rate = ctx.rate_service.get_active_rate("USD").unwrap();

    ctx.rate_service
        .update_rate(RateUpdate {
            id: rate.id.clone(),
            price: None,
            buy_commission: None,
            sell_commission: None,
        })
        .await
        .unwrap();

    assert_eq!(ctx.rate_service.get_rate_history(&rate.id).unwrap().len(), 1);
}

#[tokio::test]
async fn only_one_active_rate_per_currency() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let second = ctx
        .rate_service
        .create_rate(NewRate {
            currency_code: "USD".to_string(),
            price: dec!(7500),
            buy_commission: dec!(90),
            sell_commission: dec!(90),
        })
        .await;
    assert!(matches!(
        second,
        Err(Error::Rate(RateError::ActiveRateExists(_)))
    ));

    // After deactivation a replacement can be published.
    let current = ctx.rate_service.get_active_rate("USD").unwrap();
    ctx.rate_service.deactivate_rate(&current.id).await.unwrap();
    let replacement = ctx
        .rate_service
        .create_rate(NewRate {
            currency_code: "USD".to_string(),
            price: dec!(7500),
            buy_commission: dec!(90),
            sell_commission: dec!(90),
        })
        .await
        .unwrap();

    assert_eq!(ctx.rate_service.get_active_rate("USD").unwrap().id, replacement.id);

    // Reactivating the old quote would create a second active rate.
    let result = ctx.rate_service.activate_rate(&current.id).await;
    assert!(matches!(
        result,
        Err(Error::Rate(RateError::ActiveRateExists(_)))
    ));
}

#[tokio::test]
async fn missing_rate_is_a_typed_error() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let result = ctx.rate_service.get_active_rate("EUR");
    assert!(matches!(
        result,
        Err(Error::Rate(RateError::RateNotFound(_)))
    ));
}

#[tokio::test]
async fn base_currency_is_never_quoted() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let result = ctx
        .rate_service
        .create_rate(NewRate {
            currency_code: "PYG".to_string(),
            price: dec!(1),
            buy_commission: dec!(0),
            sell_commission: dec!(0),
        })
        .await;
    assert!(matches!(result, Err(Error::Rate(RateError::InvalidData(_)))));
}
