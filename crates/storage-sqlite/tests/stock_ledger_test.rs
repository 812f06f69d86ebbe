mod common;

use rust_decimal_macros::dec;

use cambio_core::constants::VAULT_LOCATION_ID;
use cambio_core::errors::Error;
use cambio_core::stock::{
    MovementStatus, MovementType, NewMovementLine, NewStockMovement, StockError,
};

const TERMINAL: &str = "T-01";

#[tokio::test]
async fn client_deposit_credits_terminal_stock() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    let movement = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientDeposit,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: None,
            lines: Some(vec![
                NewMovementLine {
                    denomination_id: seeded.usd_100.clone(),
                    quantity: 3,
                },
                NewMovementLine {
                    denomination_id: seeded.usd_50.clone(),
                    quantity: 1,
                },
            ]),
            transaction_id: None,
        })
        .await
        .unwrap();

    // Amount is computed from the lines: 3x100 + 1x50.
    assert_eq!(movement.amount, dec!(350));
    assert_eq!(movement.status, MovementStatus::InProgress);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 3);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_50), 1);
}

#[tokio::test]
async fn stated_amount_must_match_detail_lines() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    let result = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientDeposit,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(999)),
            lines: Some(vec![NewMovementLine {
                denomination_id: seeded.usd_100.clone(),
                quantity: 3,
            }]),
            transaction_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Stock(StockError::AmountMismatch { .. }))
    ));
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 0);
}

#[tokio::test]
async fn detail_denomination_must_belong_to_movement_currency() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;

    let result = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientDeposit,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: None,
            lines: Some(vec![NewMovementLine {
                denomination_id: seeded.eur_100.clone(),
                quantity: 1,
            }]),
            transaction_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Stock(StockError::DenominationMismatch(_)))
    ));
}

#[tokio::test]
async fn house_deposit_moves_cash_from_vault_to_terminal() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(
        &ctx,
        VAULT_LOCATION_ID,
        "USD",
        vec![(seeded.usd_100.clone(), 10)],
    )
    .await;

    ctx.stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::HouseDeposit,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: None,
            lines: Some(vec![NewMovementLine {
                denomination_id: seeded.usd_100.clone(),
                quantity: 4,
            }]),
            transaction_id: None,
        })
        .await
        .unwrap();

    assert_eq!(
        common::stock_quantity(&ctx, VAULT_LOCATION_ID, &seeded.usd_100),
        6
    );
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 4);
}

#[tokio::test]
async fn house_deposit_fails_when_vault_cannot_cover_it() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(
        &ctx,
        VAULT_LOCATION_ID,
        "USD",
        vec![(seeded.usd_100.clone(), 2)],
    )
    .await;

    let result = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::HouseDeposit,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: None,
            lines: Some(vec![NewMovementLine {
                denomination_id: seeded.usd_100.clone(),
                quantity: 5,
            }]),
            transaction_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Stock(StockError::InsufficientStock(_)))
    ));
    // The whole movement rolled back: vault untouched, terminal empty.
    assert_eq!(
        common::stock_quantity(&ctx, VAULT_LOCATION_ID, &seeded.usd_100),
        2
    );
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 0);
    assert!(ctx
        .stock_repository
        .list_movements(Some(MovementStatus::InProgress))
        .unwrap()
        .iter()
        .all(|m| m.movement_type != MovementType::HouseDeposit));
}

#[tokio::test]
async fn automatic_payout_allocates_largest_first() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(
        &ctx,
        TERMINAL,
        "USD",
        vec![
            (seeded.usd_100.clone(), 3),
            (seeded.usd_50.clone(), 1),
            (seeded.usd_20.clone(), 4),
        ],
    )
    .await;

    let movement = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientWithdrawal,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(370)),
            lines: None,
            transaction_id: None,
        })
        .await
        .unwrap();

    let details = ctx
        .stock_service
        .get_movement_details(&movement.id)
        .unwrap();
    let total: i64 = details
        .iter()
        .map(|d| {
            let face = if d.denomination_id == seeded.usd_100 {
                100
            } else if d.denomination_id == seeded.usd_50 {
                50
            } else {
                20
            };
            face * d.quantity
        })
        .sum();
    assert_eq!(total, 370);

    // 3x100 + 1x50 + 1x20 leaves no hundreds, no fifties, three twenties.
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 0);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_50), 0);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_20), 3);
}

#[tokio::test]
async fn automatic_payout_fails_whole_when_not_coverable() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(
        &ctx,
        TERMINAL,
        "USD",
        vec![(seeded.usd_100.clone(), 1), (seeded.usd_50.clone(), 1)],
    )
    .await;

    let result = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientWithdrawal,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(160)),
            lines: None,
            transaction_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Stock(StockError::InsufficientStock(_)))
    ));
    // Nothing was debited.
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 1);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_50), 1);
}

#[tokio::test]
async fn fractional_payout_amounts_are_rejected() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(&ctx, TERMINAL, "USD", vec![(seeded.usd_100.clone(), 5)]).await;

    let result = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientWithdrawal,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(100.50)),
            lines: None,
            transaction_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::Stock(StockError::InvalidAmount(_)))
    ));
}

#[tokio::test]
async fn terminal_can_cover_matches_feasibility() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(
        &ctx,
        TERMINAL,
        "USD",
        vec![
            (seeded.usd_100.clone(), 1),
            (seeded.usd_50.clone(), 1),
            (seeded.usd_20.clone(), 1),
        ],
    )
    .await;

    let can = |amount| {
        ctx.stock_service
            .terminal_can_cover(TERMINAL, "USD", amount)
            .unwrap()
    };
    assert!(can(dec!(170)));
    assert!(!can(dec!(171)));
    assert!(can(dec!(0)));
    assert!(!can(dec!(12.34)));
}

#[tokio::test]
async fn one_transaction_gets_at_most_one_movement() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(&ctx, TERMINAL, "USD", vec![(seeded.usd_100.clone(), 10)]).await;

    let transaction = ctx
        .operation_service
        .create_transaction(cambio_core::operations::NewTransaction {
            client_id: "client-1".to_string(),
            origin_currency: "PYG".to_string(),
            destination_currency: "USD".to_string(),
            origin_amount: dec!(754600),
            method_detail_id: None,
            client_category_id: None,
        })
        .await
        .unwrap();

    let new_movement = |quantity| NewStockMovement {
        movement_type: MovementType::ClientDeposit,
        location_id: TERMINAL.to_string(),
        currency_code: "USD".to_string(),
        amount: None,
        lines: Some(vec![NewMovementLine {
            denomination_id: seeded.usd_100.clone(),
            quantity,
        }]),
        transaction_id: Some(transaction.id.clone()),
    };

    ctx.stock_service
        .create_movement(new_movement(1))
        .await
        .unwrap();
    let second = ctx.stock_service.create_movement(new_movement(2)).await;

    assert!(matches!(
        second,
        Err(Error::Stock(StockError::DuplicateMovement(_)))
    ));
}

#[tokio::test]
async fn cancellation_restocks_once_and_only_once() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(&ctx, TERMINAL, "USD", vec![(seeded.usd_100.clone(), 5)]).await;

    let movement = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientWithdrawal,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(300)),
            lines: None,
            transaction_id: None,
        })
        .await
        .unwrap();
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 2);

    let cancelled = ctx.stock_service.cancel_movement(&movement.id).await.unwrap();
    assert_eq!(cancelled.status, MovementStatus::Cancelled);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 5);

    // Cancelling again must not double-restock.
    let again = ctx.stock_service.cancel_movement(&movement.id).await.unwrap();
    assert_eq!(again.status, MovementStatus::Cancelled);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 5);
}

#[tokio::test]
async fn finalized_movements_cannot_be_cancelled() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(&ctx, TERMINAL, "USD", vec![(seeded.usd_100.clone(), 5)]).await;

    let movement = ctx
        .stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientWithdrawal,
            location_id: TERMINAL.to_string(),
            currency_code: "USD".to_string(),
            amount: Some(dec!(200)),
            lines: None,
            transaction_id: None,
        })
        .await
        .unwrap();

    let finalized = ctx
        .stock_service
        .finalize_movement(&movement.id)
        .await
        .unwrap();
    assert_eq!(finalized.status, MovementStatus::Finalized);
    // Finalization has no further stock effects.
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 3);

    let result = ctx.stock_service.cancel_movement(&movement.id).await;
    assert!(matches!(
        result,
        Err(Error::Stock(StockError::InvalidStatusTransition { .. }))
    ));
}

#[tokio::test]
async fn concurrent_withdrawals_never_overdraw_stock() {
    let ctx = common::setup().await;
    let seeded = common::seed_catalog(&ctx).await;
    common::deposit(&ctx, TERMINAL, "USD", vec![(seeded.usd_100.clone(), 5)]).await;

    let attempts = 10;
    let mut handles = Vec::new();
    for _ in 0..attempts {
        let stock_service = ctx.stock_service.clone();
        handles.push(tokio::spawn(async move {
            stock_service
                .create_movement(NewStockMovement {
                    movement_type: MovementType::ClientWithdrawal,
                    location_id: TERMINAL.to_string(),
                    currency_code: "USD".to_string(),
                    amount: Some(dec!(100)),
                    lines: None,
                    transaction_id: None,
                })
                .await
        }));
    }

    let mut succeeded = 0;
    let mut insufficient = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => succeeded += 1,
            Err(Error::Stock(StockError::InsufficientStock(_))) => insufficient += 1,
            Err(other) => panic!("unexpected error: {}", other),
        }
    }

    // Every attempt either succeeded or reported insufficient stock, and the
    // entry never went negative.
    assert_eq!(succeeded, 5);
    assert_eq!(succeeded + insufficient, attempts);
    assert_eq!(common::stock_quantity(&ctx, TERMINAL, &seeded.usd_100), 0);
}
