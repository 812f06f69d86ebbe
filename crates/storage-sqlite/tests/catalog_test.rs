mod common;

use rust_decimal_macros::dec;

use cambio_core::currencies::{CurrencyError, NewCurrency, NewDenomination};
use cambio_core::errors::Error;
use cambio_core::methods::{
    DeactivationKind, MethodError, NewFinancialMethodDetail,
};

#[tokio::test]
async fn only_one_base_currency_exists() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let result = ctx
        .currency_service
        .create_currency(NewCurrency {
            code: "BRL".to_string(),
            name: "Real".to_string(),
            symbol: "R$".to_string(),
            decimal_places: 2,
            is_base: true,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Currency(CurrencyError::BaseAlreadySet(_)))
    ));
}

#[tokio::test]
async fn moving_the_base_flag_updates_catalog_and_settings() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let moved = ctx.currency_service.set_base_currency("USD").await.unwrap();
    assert!(moved.is_base);

    let old_base = ctx.currency_service.get_currency("PYG").unwrap();
    assert!(!old_base.is_base);
    assert_eq!(ctx.currency_service.get_base_currency().unwrap().code, "USD");

    // The settings mirror moved in the same transaction.
    assert_eq!(
        ctx.settings_service.get_base_currency().unwrap().as_deref(),
        Some("USD")
    );
}

#[tokio::test]
async fn duplicate_denominations_are_rejected() {
    let ctx = common::setup().await;
    common::seed_catalog(&ctx).await;

    let result = ctx
        .currency_service
        .create_denomination(NewDenomination {
            currency_code: "USD".to_string(),
            face_value: 100,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Currency(CurrencyError::DenominationAlreadyExists { .. }))
    ));
}

#[tokio::test]
async fn deactivated_denominations_survive_as_rows() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    let deactivated = ctx
        .currency_service
        .deactivate_denomination(&seeded.usd_10)
        .await
        .unwrap();
    assert!(!deactivated.is_active);

    // Still listed without the active filter: history references it.
    let all = ctx.currency_service.list_denominations("USD", None).unwrap();
    assert_eq!(all.len(), 4);
    let active = ctx
        .currency_service
        .list_denominations("USD", Some(true))
        .unwrap();
    assert_eq!(active.len(), 3);
}

#[tokio::test]
async fn method_deactivation_cascades_and_reactivation_is_selective() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    // A second detail, deactivated directly by its owner.
    let direct = ctx
        .method_service
        .create_detail(NewFinancialMethodDetail {
            method_id: seeded.method_id.clone(),
            owner: "HOUSE".to_string(),
            label: "Secondary account".to_string(),
            commission_pct: Some(dec!(1)),
        })
        .await
        .unwrap();
    ctx.method_service.deactivate_detail(&direct.id).await.unwrap();

    ctx.method_service
        .deactivate_method(&seeded.method_id)
        .await
        .unwrap();

    let cascaded = ctx.method_service.get_detail(&seeded.method_detail_id).unwrap();
    assert!(!cascaded.is_active);
    assert_eq!(cascaded.deactivation, DeactivationKind::Cascade);

    // The directly deactivated detail keeps its own marker.
    let direct_after = ctx.method_service.get_detail(&direct.id).unwrap();
    assert_eq!(direct_after.deactivation, DeactivationKind::Direct);

    // A cascade-deactivated detail cannot be revived on its own.
    let result = ctx.method_service.reactivate_detail(&seeded.method_detail_id).await;
    assert!(matches!(result, Err(Error::Method(MethodError::InvalidData(_)))));

    // Reactivating the method restores only what the cascade switched off.
    ctx.method_service
        .reactivate_method(&seeded.method_id)
        .await
        .unwrap();
    assert!(ctx
        .method_service
        .get_detail(&seeded.method_detail_id)
        .unwrap()
        .is_active);
    assert!(!ctx.method_service.get_detail(&direct.id).unwrap().is_active);
}

#[tokio::test]
async fn commission_resolution_requires_active_method_and_detail() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    assert_eq!(
        ctx.method_service
            .resolve_commission(&seeded.method_detail_id)
            .unwrap(),
        dec!(2)
    );

    ctx.method_service
        .deactivate_method(&seeded.method_id)
        .await
        .unwrap();
    let result = ctx.method_service.resolve_commission(&seeded.method_detail_id);
    assert!(matches!(
        result,
        Err(Error::Method(MethodError::MethodUnavailable(_)))
    ));
}
