//! Subcommand handlers
//!
//! Each handler drives the same state containers a screen would: list views
//! for listings, the reservation gate for bookings, the composer for orders.

pub mod history;
pub mod menu;
pub mod orders;
pub mod preferences;
pub mod reservations;
pub mod reviews;

pub use history::HistoryArgs;
pub use menu::MenuCommand;
pub use orders::OrdersCommand;
pub use preferences::PreferencesCommand;
pub use reservations::ReservationsCommand;
pub use reviews::ReviewsCommand;

use chrono::{NaiveDate, NaiveTime};
use mesa_client::{ClientError, ListView, ViewState};

/// `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("expected a date as YYYY-MM-DD, got '{value}'"))
}

/// `HH:MM`, seconds optional
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("expected a time as HH:MM, got '{value}'"))
}

/// Log the technical cause, surface the user-facing message
pub fn fail(error: ClientError, fallback: &str) -> anyhow::Error {
    tracing::warn!(error = %error, "Request failed");
    anyhow::anyhow!(error.user_message(fallback))
}

/// Render the current page of a loaded view
///
/// An error state becomes the command's error; an idle view prints `idle`.
pub fn show_page<T>(
    view: &ListView<T>,
    idle: &str,
    empty: &str,
    render: impl Fn(&T),
) -> anyhow::Result<()> {
    match view.state() {
        ViewState::Error(message) => anyhow::bail!("{message}"),
        ViewState::Idle | ViewState::Loading => {
            println!("{idle}");
            Ok(())
        }
        ViewState::Ready(items) if items.is_empty() => {
            println!("{empty}");
            Ok(())
        }
        ViewState::Ready(_) => {
            let page = view.page();
            for item in page.data {
                render(item);
            }
            if page.total_pages > 1 {
                println!("-- Página {} de {} ({} en total)", page.page, page.total_pages, page.total);
            }
            Ok(())
        }
    }
}
