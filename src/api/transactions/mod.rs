pub mod client;
pub mod models;

pub use client::TransactionsClient;
pub use models::ApiError;
