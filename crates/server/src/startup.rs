use axum::Router;
use common::ServiceKind;
use configs::AppConfig;
use migration::ResourceTable;
use service::schema::{provision_schema, ProvisionOutcome};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::errors::StartupError;
use crate::routes;

/// Browsers may call the services from any origin.
pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn table_for(kind: ServiceKind) -> ResourceTable {
    match kind {
        ServiceKind::Customer => ResourceTable::Customers,
        ServiceKind::Order => ResourceTable::Orders,
        ServiceKind::Product => ResourceTable::Products,
    }
}

/// Connect, provision the service's table, then serve until Ctrl+C.
pub async fn run(kind: ServiceKind, cfg: AppConfig) -> Result<(), StartupError> {
    let service = kind.service_name();
    let addr = cfg.server.bind_addr(kind).map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;

    // lazy pool: an unreachable database surfaces in the prober below, not here
    let db = models::db::connect_with_config(&cfg.database).await.map_err(StartupError::Database)?;

    // only this service's table; sibling services provision their own
    match provision_schema(&db, &[table_for(kind)], &cfg.startup).await {
        Ok(ProvisionOutcome::Ready { attempts }) => info!(service, event = "db_ready", attempts, "schema ready"),
        Ok(ProvisionOutcome::Skipped) => info!(service, event = "db_skipped", "database init disabled"),
        Ok(ProvisionOutcome::Exhausted { attempts }) => {
            warn!(service, event = "db_unavailable", attempts, "starting without a verified schema")
        }
        Err(e) => {
            error!(service, event = "db_init_failed", error = %e, "schema provisioning failed");
            return Err(StartupError::Schema(e));
        }
    }

    // held for cross-service calls; no handler uses it yet
    info!(service, product_service_url = %cfg.services.product_service_url, "sibling services");

    let app: Router = routes::build_router(kind, db, build_cors());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(service, event = "listening", %addr, "serving http");
    // stop accepting on Ctrl+C and let in-flight requests finish
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal(kind)).await?;
    Ok(())
}

async fn shutdown_signal(kind: ServiceKind) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service = kind.service_name(), event = "signal_error", error = %e, "failed to listen for Ctrl+C");
        return;
    }
    info!(service = kind.service_name(), event = "shutdown_signal", "received Ctrl+C, shutting down");
}
