use shared::intent::ReviewFilter;
use shared::models::{Review, ReviewCreate};
use shared::{ListFilter, ListResource};

use super::ApiClient;
use crate::{ClientResult, HttpClient, write_outcome};

impl<C: HttpClient> ApiClient<C> {
    pub async fn list_reviews(&self, filter: &ReviewFilter) -> ClientResult<Vec<Review>> {
        self.list(ListResource::Reviews, &ListFilter::from(filter)).await
    }

    pub async fn create_review(&self, review: &ReviewCreate) -> ClientResult<()> {
        let result = self.http.post(ListResource::Reviews.path(), review).await;
        crate::audit_log!(
            "create",
            "opinion",
            write_outcome(&result),
            format!("cliente {}, {} estrellas", review.customer_id, review.rating)
        );
        result
    }
}
