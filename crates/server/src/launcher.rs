use std::process::ExitCode;

use common::utils::logging::{init_logging, init_logging_default};
use common::ServiceKind;
use configs::AppConfig;
use tracing::{error, info};
use uuid::Uuid;

/// Process entry shared by the service binaries: load configuration, set up
/// logging and the Tokio runtime, then block on [`crate::run`].
pub fn launch(kind: ServiceKind) -> ExitCode {
    // load .env before logging so RUST_LOG from the file applies
    dotenvy::dotenv().ok();
    let service = kind.service_name();

    // config.toml, then environment overrides; port defaults to the service kind
    let cfg = match AppConfig::load_and_validate(kind) {
        Ok(cfg) => cfg,
        Err(e) => {
            // no config means no log format either; fall back to compact output
            init_logging_default();
            error!(service, event = "config_invalid", error = ?e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(cfg.logging.format);
    info!(service, event = "logger_init", format = ?cfg.logging.format, "tracing subscriber initialized");

    // process context attached to lifecycle events (no secrets)
    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    // route panics through tracing so they land in the same log stream
    std::panic::set_hook(Box::new(move |info| {
        error!(service, event = "panic", %service_id, pid, message = %info, "unhandled panic occurred");
    }));

    // TOKIO_WORKER_THREADS / server.worker_threads, else Tokio's default
    let worker_threads = cfg.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads {
        builder.worker_threads(w);
    }
    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service, event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    info!(
        service,
        event = "start",
        %service_id,
        pid,
        version,
        threads = worker_threads.unwrap_or_default(),
        "service starting"
    );

    // run() returns after Ctrl+C drains in-flight requests, or on a startup error
    match rt.block_on(crate::run(kind, cfg)) {
        Ok(()) => {
            info!(service, event = "stop", %service_id, pid, "service stopped normally");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service, event = "run_failed", error = %e, "service exited with error");
            ExitCode::FAILURE
        }
    }
}
