//! Startup schema provisioning.
//!
//! Runs once before the HTTP listener is bound. Connectivity failures are
//! retried with a fixed delay; anything else aborts startup. Running out of
//! attempts is not fatal: the service starts and requests report storage
//! errors until the database catches up.

use std::future::Future;
use std::time::Duration;

use configs::StartupConfig;
use migration::ResourceTable;
use sea_orm::{DatabaseConnection, DbErr};
use tokio::time::sleep;
use tracing::{error, info, warn};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), delay }
    }

    pub fn from_config(cfg: &StartupConfig) -> Self {
        Self::new(cfg.max_retries, cfg.retry_delay())
    }

    pub fn max_attempts(&self) -> u32 { self.max_attempts }

    pub fn delay(&self) -> Duration { self.delay }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Ready { attempts: u32 },
    Skipped,
    Exhausted { attempts: u32 },
}

/// Errors worth waiting out: the database is not accepting connections yet.
pub fn is_connectivity_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

/// Run `attempt` under `policy`. Only connectivity errors are retried.
pub async fn retry_with_policy<F, Fut>(policy: &RetryPolicy, mut attempt: F) -> Result<ProvisionOutcome, DbErr>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<(), DbErr>>,
{
    let max = policy.max_attempts();
    for n in 1..=max {
        info!(event = "schema_init", attempt = n, max, "attempting schema provisioning");
        match attempt().await {
            Ok(()) => {
                info!(event = "schema_ready", attempts = n, "schema provisioned");
                return Ok(ProvisionOutcome::Ready { attempts: n });
            }
            Err(e) if is_connectivity_error(&e) => {
                warn!(event = "schema_retry", attempt = n, error = %e, "database connection failed");
                if n < max {
                    sleep(policy.delay()).await;
                }
            }
            Err(e) => {
                error!(event = "schema_failed", attempt = n, error = %e, "unexpected error during schema provisioning");
                return Err(e);
            }
        }
    }
    warn!(event = "schema_exhausted", attempts = max, "schema provisioning gave up; serving without a guaranteed schema");
    Ok(ProvisionOutcome::Exhausted { attempts: max })
}

/// Ensure `tables` exist unless provisioning is disabled by configuration.
pub async fn provision_schema(
    db: &DatabaseConnection,
    tables: &[ResourceTable],
    cfg: &StartupConfig,
) -> Result<ProvisionOutcome, DbErr> {
    if cfg.disable_db {
        warn!(event = "schema_skipped", "skipping schema provisioning (DISABLE_DB=true)");
        return Ok(ProvisionOutcome::Skipped);
    }
    let policy = RetryPolicy::from_config(cfg);
    retry_with_policy(&policy, || migration::ensure_tables(db, tables)).await
}
