use shared::models::CustomerPreferences;

use super::ApiClient;
use crate::{ClientResult, HttpClient, write_outcome};

const PREFERENCES_PATH: &str = "/api/preferencias-clientes";

impl<C: HttpClient> ApiClient<C> {
    /// Stored preferences of a customer; `None` when the backend has none yet
    pub async fn get_preferences(
        &self,
        customer_id: i64,
    ) -> ClientResult<Option<CustomerPreferences>> {
        self.http
            .get(&format!("{PREFERENCES_PATH}/{customer_id}"))
            .await
    }

    /// Stored preferences, or a blank record ready to be edited
    pub async fn preferences_or_empty(&self, customer_id: i64) -> ClientResult<CustomerPreferences> {
        Ok(self
            .get_preferences(customer_id)
            .await?
            .unwrap_or_else(|| CustomerPreferences::empty(customer_id)))
    }

    /// Create or update, keyed by customer id
    pub async fn save_preferences(&self, preferences: &CustomerPreferences) -> ClientResult<()> {
        let result = self.http.post(PREFERENCES_PATH, preferences).await;
        crate::audit_log!(
            "save",
            format!("preferencias:{}", preferences.customer_id),
            write_outcome(&result)
        );
        result
    }
}
