//! Typed REST API
//!
//! One file per backend resource. Every call goes through [`HttpClient`],
//! so the same API runs against the network or an in-memory double.

mod history;
mod menu;
mod orders;
mod preferences;
mod reservations;
mod reviews;

use serde::de::DeserializeOwned;
use shared::{ListFilter, ListResource};

use crate::{ClientResult, HttpClient};

/// Typed access to the restaurant backend
#[derive(Debug, Clone)]
pub struct ApiClient<C> {
    http: C,
}

impl<C: HttpClient> ApiClient<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &C {
        &self.http
    }

    /// Fetch a full listing, narrowed by the non-empty fields of `filter`
    pub async fn list<T: DeserializeOwned>(
        &self,
        resource: ListResource,
        filter: &ListFilter,
    ) -> ClientResult<Vec<T>> {
        let path = filter.apply_to(resource.path());
        tracing::debug!(%resource, %path, "Fetching list");
        self.http.get(&path).await
    }
}
