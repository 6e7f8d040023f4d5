use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tokio::task::JoinError;
use tracing::{debug, info, warn};

use crate::api::transactions::{ApiError, TransactionsClient};
use crate::config::LoadTestConfig;
use crate::models::{LoadTestSummary, UserOutcome};
use crate::services::payload_service::create_dummy_transaction;

/// Shared, append-only list of per-user pass/fail markers
pub type ResultList = Arc<Mutex<Vec<bool>>>;

/// One simulated user: submit a single-record batch and record the outcome
///
/// Never fails; every error is reported on the console and recorded as `false`.
pub async fn simulate_user(
    client: Arc<TransactionsClient>,
    user_id: usize,
    results: ResultList,
) -> UserOutcome {
    let payload = [create_dummy_transaction(user_id)];

    let start_time = Instant::now();
    let response = client.submit_batch(&payload).await;
    let elapsed = start_time.elapsed();

    let success = match response {
        Ok(()) => {
            println!("✅ User {}: Success ({:.2}s)", user_id, elapsed.as_secs_f64());
            true
        }
        Err(e) => {
            report_failure(user_id, &e);
            false
        }
    };

    results.lock().await.push(success);

    UserOutcome {
        user_id,
        success,
        elapsed,
    }
}

fn report_failure(user_id: usize, error: &ApiError) {
    match (error.status(), error.body()) {
        (Some(status), Some(body)) => {
            println!("❌ User {}: Failed ({}) - {}", user_id, status, body);
        }
        _ => {
            println!("❌ User {}: Error - {}", user_id, error);
        }
    }
    warn!("User {} request failed: {}", user_id, error);
}

/// Log a finished worker; returns false if the task panicked or was cancelled
fn report_join(joined: Result<UserOutcome, JoinError>) -> bool {
    match joined {
        Ok(outcome) => {
            debug!(
                "User {} finished in {}ms (success: {})",
                outcome.user_id,
                outcome.elapsed.as_millis(),
                outcome.success
            );
            true
        }
        Err(e) => {
            println!("❌ Worker task failed - {}", e);
            warn!("Worker task did not complete: {}", e);
            false
        }
    }
}

/// Fan out one worker per configured user and wait for all of them
///
/// The only error is failing to build the HTTP client, which happens before
/// any request is sent.
pub async fn run_load_test(config: &LoadTestConfig) -> Result<LoadTestSummary, ApiError> {
    let client = Arc::new(TransactionsClient::new(
        config.api_url.clone(),
        config.timeout,
    )?);

    println!(
        "🚀 Starting Load Test with {} concurrent users...",
        config.num_users
    );
    info!(
        "Targeting {} (timeout {}s)",
        client.api_url(),
        config.timeout.as_secs()
    );

    let results: ResultList = Arc::new(Mutex::new(Vec::with_capacity(config.num_users)));

    let handles: Vec<_> = (0..config.num_users)
        .map(|user_id| {
            tokio::spawn(simulate_user(
                Arc::clone(&client),
                user_id,
                Arc::clone(&results),
            ))
        })
        .collect();

    for handle in handles {
        report_join(handle.await);
    }

    let results = results.lock().await;
    Ok(LoadTestSummary::from_results(&results, config.num_users))
}
