//! Transaction record sent to the transactions API

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Review status of a transaction as the server stores it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Approved,
    Rejected,
    Pending,
    Paid,
}

/// Income shares per participant role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    pub taker: i64,
    pub controller: i64,
    pub superior: i64,
    pub pool: i64,
    pub platform: i64,
}

/// One transaction as accepted by `POST /api/transactions`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: Uuid,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub image_url: String,
    pub status: TransactionStatus,
    pub amount: i64,
    pub taker: String,
    pub controller: String,
    pub superior: String,
    pub order_date: String,
    pub content: String,
    pub distribution: Distribution,
}
