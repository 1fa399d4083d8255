//! Tracing setup for the SIP API binary.
//!
//! Installs the global subscriber once per process and bridges `log::`
//! macros (used throughout the store code) into tracing events.

use std::any::type_name_of_val;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
};

use crate::config::AppConfig;

/// Errors that can occur while initializing global telemetry.
#[derive(Debug, Error)]
pub enum TelemetryInitError {
    #[error("failed to install log tracer bridge: {0}")]
    LogTracer(#[from] log::SetLoggerError),
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

static TELEMETRY_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize tracing exactly once. `RUST_LOG` overrides the configured
/// level; output is JSON unless the config asks for `pretty`.
pub fn init_tracing(config: &AppConfig) -> Result<(), TelemetryInitError> {
    if TELEMETRY_INITIALIZED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // The log bridge must be in place before anything emits via `log::`.
    let bridge = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();
    if let Err(err) = bridge {
        // A LogTracer registered earlier (tests do this) is fine; any
        // other logger keeps `log::` output out of tracing.
        if !type_name_of_val(log::logger()).contains("LogTracer") {
            eprintln!(
                "warning: log bridge not installed ({err}); `log::` macros will not reach tracing"
            );
        }
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.log_format == "pretty" {
        registry.with(fmt::layer().pretty()).try_init()
    } else {
        registry.with(fmt::layer().json()).try_init()
    };
    if let Err(err) = installed {
        TELEMETRY_INITIALIZED.store(false, Ordering::SeqCst);
        eprintln!("warning: global subscriber not installed ({err}); keeping the existing one");
    }

    Ok(())
}
