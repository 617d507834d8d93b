use std::collections::BTreeSet;

use clap::Subcommand;
use mesa_client::models::CustomerPreferences;
use mesa_client::view::{Form, Screen};
use mesa_client::{ApiClient, HttpClient};

use super::fail;

#[derive(Subcommand)]
pub enum PreferencesCommand {
    /// Show the stored preferences of a customer
    Get {
        #[arg(long)]
        customer: i64,
    },

    /// Create or replace the preferences of a customer
    ///
    /// Lists are comma separated.
    Save {
        #[arg(long)]
        customer: i64,

        #[arg(long, default_value = "")]
        allergies: String,

        #[arg(long, default_value = "")]
        preferences: String,

        #[arg(long, default_value = "")]
        restrictions: String,

        #[arg(long, default_value = "")]
        favorites: String,
    },
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, cmd: PreferencesCommand) -> anyhow::Result<()> {
    let preferences = match cmd {
        PreferencesCommand::Get { customer } => api
            .preferences_or_empty(customer)
            .await
            .map_err(|e| fail(e, Screen::Preferences.load_failed_message()))?,
        PreferencesCommand::Save {
            customer,
            allergies,
            preferences,
            restrictions,
            favorites,
        } => {
            let record = CustomerPreferences::from_lists(
                customer,
                &allergies,
                &preferences,
                &restrictions,
                &favorites,
            )?;
            api.save_preferences(&record)
                .await
                .map_err(|e| fail(e, Form::Preferences.failed_message()))?;
            println!("Preferencias guardadas.");
            record
        }
    };

    print_preferences(&preferences);
    Ok(())
}

fn print_preferences(prefs: &CustomerPreferences) {
    println!("Cliente {}", prefs.customer_id);
    if prefs.is_empty() {
        println!("  Sin preferencias registradas.");
        return;
    }
    print_list("Alergias", &prefs.allergies);
    print_list("Preferencias alimentarias", &prefs.dietary_preferences);
    print_list("Restricciones dietéticas", &prefs.dietary_restrictions);
    print_list("Comidas favoritas", &prefs.favorite_dishes);
}

fn print_list(label: &str, values: &BTreeSet<String>) {
    let joined: Vec<&str> = values.iter().map(String::as_str).collect();
    println!("  {label}: {}", joined.join(", "));
}
