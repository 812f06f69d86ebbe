#![allow(dead_code)]

use std::sync::Arc;

use rust_decimal_macros::dec;
use tempfile::TempDir;

use cambio_core::categories::{
    CategoryRepositoryTrait, CategoryService, CategoryServiceTrait, NewClientCategory,
};
use cambio_core::currencies::{
    CurrencyRepositoryTrait, CurrencyService, CurrencyServiceTrait, NewCurrency, NewDenomination,
};
use cambio_core::methods::{
    MethodKind, MethodRepositoryTrait, MethodService, MethodServiceTrait, NewFinancialMethod,
    NewFinancialMethodDetail,
};
use cambio_core::operations::{
    OperationService, OperationServiceTrait, TransactionRepositoryTrait,
};
use cambio_core::profit::{ProfitRepositoryTrait, ProfitService, ProfitServiceTrait};
use cambio_core::rates::{NewRate, RateRepositoryTrait, RateService, RateServiceTrait};
use cambio_core::settings::{SettingsRepositoryTrait, SettingsService, SettingsServiceTrait};
use cambio_core::stock::{
    MovementType, NewMovementLine, NewStockMovement, StockRepositoryTrait, StockService,
    StockServiceTrait,
};
use cambio_storage_sqlite::categories::CategoryRepository;
use cambio_storage_sqlite::currencies::CurrencyRepository;
use cambio_storage_sqlite::db::{self, DbPool};
use cambio_storage_sqlite::methods::MethodRepository;
use cambio_storage_sqlite::operations::TransactionRepository;
use cambio_storage_sqlite::profit::ProfitRepository;
use cambio_storage_sqlite::rates::RateRepository;
use cambio_storage_sqlite::settings::SettingsRepository;
use cambio_storage_sqlite::stock::StockRepository;

/// Everything a test needs: one temporary database with the full service
/// graph wired against it.
pub struct TestContext {
    // Keeps the database directory alive for the test's duration.
    _data_dir: TempDir,
    pub pool: Arc<DbPool>,
    pub currency_repository: Arc<dyn CurrencyRepositoryTrait>,
    pub category_repository: Arc<dyn CategoryRepositoryTrait>,
    pub method_repository: Arc<dyn MethodRepositoryTrait>,
    pub rate_repository: Arc<dyn RateRepositoryTrait>,
    pub stock_repository: Arc<dyn StockRepositoryTrait>,
    pub transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    pub profit_repository: Arc<dyn ProfitRepositoryTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub currency_service: Arc<dyn CurrencyServiceTrait>,
    pub category_service: Arc<dyn CategoryServiceTrait>,
    pub method_service: Arc<dyn MethodServiceTrait>,
    pub rate_service: Arc<dyn RateServiceTrait>,
    pub stock_service: Arc<dyn StockServiceTrait>,
    pub profit_service: Arc<dyn ProfitServiceTrait>,
    pub operation_service: Arc<dyn OperationServiceTrait>,
}

pub async fn setup() -> TestContext {
    let data_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = db::init(data_dir.path().to_str().unwrap()).expect("Failed to init database");
    let pool = db::create_pool(&db_path).expect("Failed to create pool");
    db::run_migrations(&pool).expect("Failed to run migrations");

    let writer = db::spawn_writer((*pool).clone());

    let currency_repository: Arc<dyn CurrencyRepositoryTrait> =
        Arc::new(CurrencyRepository::new(pool.clone(), writer.clone()));
    let category_repository: Arc<dyn CategoryRepositoryTrait> =
        Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let method_repository: Arc<dyn MethodRepositoryTrait> =
        Arc::new(MethodRepository::new(pool.clone(), writer.clone()));
    let rate_repository: Arc<dyn RateRepositoryTrait> =
        Arc::new(RateRepository::new(pool.clone(), writer.clone()));
    let stock_repository: Arc<dyn StockRepositoryTrait> =
        Arc::new(StockRepository::new(pool.clone(), writer.clone()));
    let transaction_repository: Arc<dyn TransactionRepositoryTrait> =
        Arc::new(TransactionRepository::new(pool.clone(), writer.clone()));
    let profit_repository: Arc<dyn ProfitRepositoryTrait> =
        Arc::new(ProfitRepository::new(pool.clone(), writer.clone()));
    let settings_repository: Arc<dyn SettingsRepositoryTrait> =
        Arc::new(SettingsRepository::new(pool.clone(), writer.clone()));

    let settings_service: Arc<dyn SettingsServiceTrait> = Arc::new(SettingsService::new(
        settings_repository.clone(),
        currency_repository.clone(),
    ));
    let currency_service: Arc<dyn CurrencyServiceTrait> =
        Arc::new(CurrencyService::new(currency_repository.clone()));
    let category_service: Arc<dyn CategoryServiceTrait> =
        Arc::new(CategoryService::new(category_repository.clone()));
    let method_service: Arc<dyn MethodServiceTrait> =
        Arc::new(MethodService::new(method_repository.clone()));
    let rate_service: Arc<dyn RateServiceTrait> = Arc::new(RateService::new(
        rate_repository.clone(),
        currency_repository.clone(),
    ));
    let stock_service: Arc<dyn StockServiceTrait> = Arc::new(StockService::new(
        stock_repository.clone(),
        currency_repository.clone(),
    ));
    let profit_service: Arc<dyn ProfitServiceTrait> = Arc::new(ProfitService::new(
        profit_repository.clone(),
        method_repository.clone(),
    ));
    let operation_service: Arc<dyn OperationServiceTrait> = Arc::new(OperationService::new(
        currency_repository.clone(),
        category_repository.clone(),
        rate_service.clone(),
        method_service.clone(),
        transaction_repository.clone(),
        stock_service.clone(),
        profit_service.clone(),
    ));

    TestContext {
        _data_dir: data_dir,
        pool,
        currency_repository,
        category_repository,
        method_repository,
        rate_repository,
        stock_repository,
        transaction_repository,
        profit_repository,
        settings_service,
        currency_service,
        category_service,
        method_service,
        rate_service,
        stock_service,
        profit_service,
        operation_service,
    }
}

/// Ids of the seeded catalog rows.
pub struct Seeded {
    pub usd_100: String,
    pub usd_50: String,
    pub usd_20: String,
    pub usd_10: String,
    pub eur_100: String,
    pub method_id: String,
    pub method_detail_id: String,
    pub category_id: String,
}

/// Seeds a small but realistic catalog: guarani base, USD and EUR foreign,
/// USD quoted at 7300 with 100 commission on both sides, a 2% bank-transfer
/// method, a 50%-discount category.
pub async fn seed_catalog(ctx: &TestContext) -> Seeded {
    ctx.currency_service
        .create_currency(NewCurrency {
            code: "PYG".to_string(),
            name: "Guarani".to_string(),
            symbol: "₲".to_string(),
            decimal_places: 0,
            is_base: true,
        })
        .await
        .unwrap();
    ctx.currency_service
        .create_currency(NewCurrency {
            code: "USD".to_string(),
            name: "US Dollar".to_string(),
            symbol: "$".to_string(),
            decimal_places: 2,
            is_base: false,
        })
        .await
        .unwrap();
    ctx.currency_service
        .create_currency(NewCurrency {
            code: "EUR".to_string(),
            name: "Euro".to_string(),
            symbol: "€".to_string(),
            decimal_places: 2,
            is_base: false,
        })
        .await
        .unwrap();

    let mut usd_denoms = Vec::new();
    for face_value in [100, 50, 20, 10] {
        let denomination = ctx
            .currency_service
            .create_denomination(NewDenomination {
                currency_code: "USD".to_string(),
                face_value,
            })
            .await
            .unwrap();
        usd_denoms.push(denomination.id);
    }
    let eur_100 = ctx
        .currency_service
        .create_denomination(NewDenomination {
            currency_code: "EUR".to_string(),
            face_value: 100,
        })
        .await
        .unwrap()
        .id;

    ctx.rate_service
        .create_rate(NewRate {
            currency_code: "USD".to_string(),
            price: dec!(7300),
            buy_commission: dec!(100),
            sell_commission: dec!(100),
        })
        .await
        .unwrap();

    let method = ctx
        .method_service
        .create_method(NewFinancialMethod {
            name: "Bank transfer".to_string(),
            kind: MethodKind::BankTransfer,
            commission_pct: dec!(2),
        })
        .await
        .unwrap();
    let detail = ctx
        .method_service
        .create_detail(NewFinancialMethodDetail {
            method_id: method.id.clone(),
            owner: "HOUSE".to_string(),
            label: "Main operating account".to_string(),
            commission_pct: None,
        })
        .await
        .unwrap();

    let category = ctx
        .category_service
        .create_category(NewClientCategory {
            name: "VIP".to_string(),
            discount_pct: dec!(50),
        })
        .await
        .unwrap();

    Seeded {
        usd_100: usd_denoms[0].clone(),
        usd_50: usd_denoms[1].clone(),
        usd_20: usd_denoms[2].clone(),
        usd_10: usd_denoms[3].clone(),
        eur_100,
        method_id: method.id,
        method_detail_id: detail.id,
        category_id: category.id,
    }
}

/// Credits a terminal by running a client deposit through the ledger.
pub async fn deposit(
    ctx: &TestContext,
    location_id: &str,
    currency_code: &str,
    lines: Vec<(String, i64)>,
) {
    ctx.stock_service
        .create_movement(NewStockMovement {
            movement_type: MovementType::ClientDeposit,
            location_id: location_id.to_string(),
            currency_code: currency_code.to_string(),
            amount: None,
            lines: Some(
                lines
                    .into_iter()
                    .map(|(denomination_id, quantity)| NewMovementLine {
                        denomination_id,
                        quantity,
                    })
                    .collect(),
            ),
            transaction_id: None,
        })
        .await
        .unwrap();
}

/// Total units of one denomination held at a location.
pub fn stock_quantity(ctx: &TestContext, location_id: &str, denomination_id: &str) -> i64 {
    ctx.stock_repository
        .get_entries(location_id)
        .unwrap()
        .into_iter()
        .filter(|e| e.denomination_id == denomination_id)
        .map(|e| e.quantity)
        .sum()
}
