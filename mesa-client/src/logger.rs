//! Logging Infrastructure
//!
//! Console output (pretty or JSON) plus, when a directory is configured:
//! - Daily rotating application logs (deleted after 14 days)
//! - Daily audit logs of every write sent to the backend (never deleted)

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

use crate::LogConfig;

/// Days an application log file is kept
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

/// Delete `app.YYYY-MM-DD` files older than the retention window
///
/// The CLI is short-lived, so this runs once at startup instead of on a timer.
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<usize> {
    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(0);
    }

    let cutoff = Local::now().date_naive() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);
    let mut removed = 0;

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(date) = app_log_date(name)
            && date < cutoff
        {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }

    Ok(removed)
}

/// Date of a rolled application log, `app.2024-01-31` style
fn app_log_date(file_name: &str) -> Option<NaiveDate> {
    let date_part = file_name.strip_prefix("app.")?;
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `config.level` when set.
///
/// # Examples
/// ```no_run
/// use mesa_client::{LogConfig, logger::init_logger};
///
/// // Development setup (console only)
/// init_logger(&LogConfig::default())?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger(config: &LogConfig) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let subscriber = tracing_subscriber::registry().with(env_filter);

    let console_layer = if config.json {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .boxed()
    };

    let Some(dir) = config.dir.as_deref() else {
        subscriber.with(console_layer).try_init()?;
        return Ok(());
    };

    let log_dir = Path::new(dir);
    let app_log_dir = log_dir.join("app");
    let audit_log_dir = log_dir.join("audit");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&audit_log_dir)?;

    // Everything except audit events
    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let app_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(app_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != "audit"
        }));

    let audit_log = RollingFileAppender::new(Rotation::DAILY, audit_log_dir, "audit");
    let audit_layer = fmt::layer()
        .json()
        .with_target(true)
        .with_writer(std::sync::Mutex::new(audit_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() == "audit"
        }));

    subscriber
        .with(console_layer)
        .with(app_layer)
        .with(audit_layer)
        .try_init()?;

    match cleanup_old_logs(log_dir) {
        Ok(0) => {}
        Ok(removed) => tracing::info!(removed, "Deleted old log files"),
        Err(e) => tracing::warn!(error = %e, "Failed to cleanup old logs"),
    }

    Ok(())
}

/// Audit log helper - records every write sent to the backend
///
/// Emitted once the backend has answered, with `outcome` set to `ok`,
/// `rejected` (non-2xx) or `failed` (no usable answer).
///
/// # Examples
/// ```no_run
/// mesa_client::audit_log!("create", "reserva", "ok", "mesa 4, 2024-01-01 20:00");
/// mesa_client::audit_log!("update", "pedido:17", "rejected", "Entregado");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($action:expr, $resource:expr, $outcome:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = %$resource,
            outcome = $outcome,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
    ($action:expr, $resource:expr, $outcome:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            action = $action,
            resource = %$resource,
            outcome = $outcome,
            details = %$details,
            timestamp = chrono::Local::now().to_rfc3339(),
            "AUDIT"
        );
    };
}
