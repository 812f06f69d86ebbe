//! Stock ledger domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::VAULT_LOCATION_ID;

/// The quantity of one denomination held at one location. The vault is the
/// singular location [`VAULT_LOCATION_ID`]; terminals use their own ids.
/// Quantity never goes below zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockEntry {
    pub id: String,
    pub location_id: String,
    pub denomination_id: String,
    pub quantity: i64,
    pub updated_at: NaiveDateTime,
}

/// A denomination with its available quantity at one location; the
/// allocator's working view of a cassette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenominationStock {
    pub denomination_id: String,
    pub face_value: i64,
    pub quantity: i64,
}

/// One line of an allocator result: how many units of a denomination to pay
/// out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationLine {
    pub denomination_id: String,
    pub face_value: i64,
    pub quantity: i64,
}

/// The direction/type of a cash flow event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// A client hands cash to a terminal.
    ClientDeposit,
    /// The house replenishes a terminal from the vault.
    HouseDeposit,
    /// A terminal pays cash out to a client (automatic payout).
    ClientWithdrawal,
    /// The house drains a terminal back into the vault.
    HouseWithdrawal,
}

/// Which locations a movement debits and credits. `None` means the cash
/// enters from or leaves to a party outside the ledger (the client).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashFlow {
    pub debit: Option<String>,
    pub credit: Option<String>,
}

impl MovementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementType::ClientDeposit => "CLIENT_DEPOSIT",
            MovementType::HouseDeposit => "HOUSE_DEPOSIT",
            MovementType::ClientWithdrawal => "CLIENT_WITHDRAWAL",
            MovementType::HouseWithdrawal => "HOUSE_WITHDRAWAL",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "CLIENT_DEPOSIT" => Some(MovementType::ClientDeposit),
            "HOUSE_DEPOSIT" => Some(MovementType::HouseDeposit),
            "CLIENT_WITHDRAWAL" => Some(MovementType::ClientWithdrawal),
            "HOUSE_WITHDRAWAL" => Some(MovementType::HouseWithdrawal),
            _ => None,
        }
    }

    /// The single dispatch for movement semantics: every other rule derives
    /// the locations it touches from here.
    pub fn cash_flow(&self, terminal_id: &str) -> CashFlow {
        match self {
            MovementType::ClientDeposit => CashFlow {
                debit: None,
                credit: Some(terminal_id.to_string()),
            },
            MovementType::HouseDeposit => CashFlow {
                debit: Some(VAULT_LOCATION_ID.to_string()),
                credit: Some(terminal_id.to_string()),
            },
            MovementType::ClientWithdrawal => CashFlow {
                debit: Some(terminal_id.to_string()),
                credit: None,
            },
            MovementType::HouseWithdrawal => CashFlow {
                debit: Some(terminal_id.to_string()),
                credit: Some(VAULT_LOCATION_ID.to_string()),
            },
        }
    }

    /// Automatic payouts derive their detail lines from the allocator; the
    /// other types take caller-supplied lines.
    pub fn details_are_derived(&self) -> bool {
        matches!(self, MovementType::ClientWithdrawal)
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a movement. `InProgress` transitions once, to either
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementStatus {
    InProgress,
    Finalized,
    Cancelled,
}

impl MovementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovementStatus::InProgress => "IN_PROGRESS",
            MovementStatus::Finalized => "FINALIZED",
            MovementStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_str_loose(value: &str) -> Option<Self> {
        match value {
            "IN_PROGRESS" => Some(MovementStatus::InProgress),
            "FINALIZED" => Some(MovementStatus::Finalized),
            "CANCELLED" => Some(MovementStatus::Cancelled),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, MovementStatus::InProgress)
    }
}

impl fmt::Display for MovementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of a cash flow event. Stock is debited/credited when
/// the movement is created; finalization has no further stock effects and
/// cancellation applies the inverse effects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovement {
    pub id: String,
    pub movement_type: MovementType,
    pub location_id: String,
    pub currency_code: String,
    pub amount: Decimal,
    pub transaction_id: Option<String>,
    pub status: MovementStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// One denomination line of a movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockMovementDetail {
    pub id: String,
    pub movement_id: String,
    pub denomination_id: String,
    pub quantity: i64,
}

/// Input model for creating a movement. `lines` must be absent for automatic
/// payouts (they are derived) and present otherwise; `amount` may be omitted
/// when lines are supplied, in which case it is computed from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStockMovement {
    pub movement_type: MovementType,
    pub location_id: String,
    pub currency_code: String,
    pub amount: Option<Decimal>,
    pub lines: Option<Vec<NewMovementLine>>,
    pub transaction_id: Option<String>,
}

/// A caller-supplied denomination line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMovementLine {
    pub denomination_id: String,
    pub quantity: i64,
}

/// One atomic stock mutation: positive delta credits (get-or-create at zero),
/// negative delta debits through the conditional update that refuses to go
/// below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockEffect {
    pub location_id: String,
    pub denomination_id: String,
    pub delta: i64,
}

impl StockEffect {
    pub fn credit(location_id: &str, denomination_id: &str, quantity: i64) -> Self {
        Self {
            location_id: location_id.to_string(),
            denomination_id: denomination_id.to_string(),
            delta: quantity,
        }
    }

    pub fn debit(location_id: &str, denomination_id: &str, quantity: i64) -> Self {
        Self {
            location_id: location_id.to_string(),
            denomination_id: denomination_id.to_string(),
            delta: -quantity,
        }
    }

    /// The compensating effect applied when a movement is cancelled.
    pub fn inverse(&self) -> Self {
        Self {
            location_id: self.location_id.clone(),
            denomination_id: self.denomination_id.clone(),
            delta: -self.delta,
        }
    }
}
