use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::Rng;
use uuid::Uuid;

use crate::models::{Distribution, TransactionRecord, TransactionStatus};

pub const MIN_AMOUNT: i64 = 10;
pub const MAX_AMOUNT: i64 = 100;

/// Transparent 1x1 PNG used as the receipt image of every record
const PIXEL_PNG: [u8; 70] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0xDA, 0x63, 0x64,
    0xF8, 0xCF, 0x50, 0x0F, 0x00, 0x03, 0x86, 0x01, 0x80, 0x5A, 0x34, 0x7D, 0x6B, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Build the `data:` URL carrying the embedded pixel
pub fn pixel_data_url() -> String {
    format!("data:image/png;base64,{}", BASE64.encode(PIXEL_PNG))
}

/// Build one synthetic transaction for a simulated user
pub fn create_dummy_transaction(user_id: usize) -> TransactionRecord {
    let amount = rand::thread_rng().gen_range(MIN_AMOUNT..=MAX_AMOUNT);

    TransactionRecord {
        id: Uuid::new_v4(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        image_url: pixel_data_url(),
        status: TransactionStatus::Approved,
        amount,
        taker: format!("User_{}", user_id),
        controller: "Controller_A".to_string(),
        superior: "Superior_B".to_string(),
        order_date: "11.30".to_string(),
        content: format!("Load Test Order from User {}", user_id),
        distribution: Distribution {
            taker: 10,
            controller: 2,
            superior: 1,
            pool: 5,
            platform: 2,
        },
    }
}
