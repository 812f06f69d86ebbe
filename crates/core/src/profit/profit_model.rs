//! Profit domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Derived earnings record, one-to-one with a completed transaction.
/// Created once and read-only thereafter; the classification fields
/// (year/month/currency/method) exist for the external reporting layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profit {
    pub id: String,
    pub transaction_id: String,
    pub net_profit: Decimal,
    pub market_rate: Decimal,
    pub applied_rate: Decimal,
    pub foreign_amount: Decimal,
    pub currency_code: String,
    pub method_kind: Option<String>,
    pub year: i32,
    pub month: i32,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a profit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfit {
    pub transaction_id: String,
    pub net_profit: Decimal,
    pub market_rate: Decimal,
    pub applied_rate: Decimal,
    pub foreign_amount: Decimal,
    pub currency_code: String,
    pub method_kind: Option<String>,
    pub year: i32,
    pub month: i32,
}
