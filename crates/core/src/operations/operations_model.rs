//! Exchange operation domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Buy or sell, always stated together with whose perspective it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationDirection {
    Buy,
    Sell,
}

impl OperationDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationDirection::Buy => "BUY",
            OperationDirection::Sell => "SELL",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "BUY" => Some(OperationDirection::Buy),
            "SELL" => Some(OperationDirection::Sell),
            _ => None,
        }
    }

    /// The same trade seen from the other party.
    pub fn mirror(&self) -> Self {
        match self {
            OperationDirection::Buy => OperationDirection::Sell,
            OperationDirection::Sell => OperationDirection::Buy,
        }
    }
}

impl fmt::Display for OperationDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both perspectives on one operation; always mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSides {
    pub client: OperationDirection,
    pub house: OperationDirection,
}

impl OperationSides {
    pub fn from_client(client: OperationDirection) -> Self {
        Self {
            client,
            house: client.mirror(),
        }
    }
}

/// Lifecycle state of a business transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Pending => "PENDING",
            TransactionStatus::InProgress => "IN_PROGRESS",
            TransactionStatus::Completed => "COMPLETED",
            TransactionStatus::Cancelled => "CANCELLED",
            TransactionStatus::Failed => "FAILED",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "PENDING" => Some(TransactionStatus::Pending),
            "IN_PROGRESS" => Some(TransactionStatus::InProgress),
            "COMPLETED" => Some(TransactionStatus::Completed),
            "CANCELLED" => Some(TransactionStatus::Cancelled),
            "FAILED" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TransactionStatus::Completed | TransactionStatus::Cancelled | TransactionStatus::Failed
        )
    }
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The business operation: one base-currency leg and one foreign leg, priced
/// at creation time. Links to at most one stock movement and one profit
/// record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub client_id: String,
    /// Direction from the house's perspective.
    pub house_side: OperationDirection,
    pub origin_currency: String,
    pub destination_currency: String,
    pub origin_amount: Decimal,
    pub destination_amount: Decimal,
    pub market_rate: Decimal,
    pub applied_rate: Decimal,
    pub method_detail_id: Option<String>,
    pub status: TransactionStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    /// The foreign-currency leg: the origin when the house bought foreign
    /// cash, the destination when it sold.
    pub fn foreign_currency_code(&self) -> &str {
        match self.house_side {
            OperationDirection::Buy => &self.origin_currency,
            OperationDirection::Sell => &self.destination_currency,
        }
    }

    pub fn foreign_amount(&self) -> Decimal {
        match self.house_side {
            OperationDirection::Buy => self.origin_amount,
            OperationDirection::Sell => self.destination_amount,
        }
    }
}

/// Input model for registering a new transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub client_id: String,
    pub origin_currency: String,
    pub destination_currency: String,
    pub origin_amount: Decimal,
    pub method_detail_id: Option<String>,
    pub client_category_id: Option<String>,
}

/// A pricing request, either to preview an operation or to back a new
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    pub origin_currency: String,
    pub destination_currency: String,
    pub amount: Decimal,
    pub method_detail_id: Option<String>,
    pub client_category_id: Option<String>,
}

/// The inputs that produced a quote, echoed back for display and audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParameters {
    pub price: Decimal,
    pub commission_base: Decimal,
    pub method_commission_pct: Decimal,
    pub discount_pct: Decimal,
}

/// A priced operation as presented to the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationQuote {
    pub direction: OperationSides,
    pub origin_code: String,
    pub destination_code: String,
    pub applied_rate: Decimal,
    pub origin_amount: Decimal,
    pub destination_amount: Decimal,
    pub parameters: QuoteParameters,
}

/// A transaction state change notified by the surrounding system. The core
/// reacts with stock reservation, finalization or release; invoicing and
/// payment capture stay outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum TransactionEvent {
    /// The transaction was registered; house-sell operations reserve the
    /// payout cash at the named terminal.
    Created {
        transaction_id: String,
        terminal_id: String,
    },
    Completed {
        transaction_id: String,
    },
    Cancelled {
        transaction_id: String,
    },
    Failed {
        transaction_id: String,
    },
}

impl TransactionEvent {
    pub fn transaction_id(&self) -> &str {
        match self {
            TransactionEvent::Created { transaction_id, .. }
            | TransactionEvent::Completed { transaction_id }
            | TransactionEvent::Cancelled { transaction_id }
            | TransactionEvent::Failed { transaction_id } => transaction_id,
        }
    }
}
