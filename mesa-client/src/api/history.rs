use shared::intent::HistoryFilter;
use shared::models::HistoryRecord;
use shared::{ListFilter, ListResource};

use super::ApiClient;
use crate::{ClientError, ClientResult, HttpClient};
use shared::DomainError;

impl<C: HttpClient> ApiClient<C> {
    /// Detailed history of one customer
    ///
    /// Refuses to query without a customer id.
    pub async fn detailed_history(&self, filter: &HistoryFilter) -> ClientResult<Vec<HistoryRecord>> {
        let query = ListFilter::from(filter);
        if !ListResource::DetailedHistory.accepts(&query) {
            return Err(ClientError::Validation(DomainError::validation(
                "id_cliente_mysql",
                "customer id is required",
            )));
        }
        self.list(ListResource::DetailedHistory, &query).await
    }
}
