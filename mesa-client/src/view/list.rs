//! Filtered list fetcher
//!
//! A list screen fetches the full filtered listing and paginates locally.
//! Fetches are only issued by an explicit commit, and every fetch carries a
//! ticket: a response whose ticket is not the latest one is discarded, so a
//! slow answer to an old filter can never overwrite a newer result.

use serde::de::DeserializeOwned;
use shared::{ListFilter, ListResource, Page, Pager};

use super::{Screen, ViewState};
use crate::{ApiClient, ClientResult, HttpClient};

/// Handle for one in-flight fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    filter: ListFilter,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Filter the fetch was issued for
    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }
}

#[derive(Debug, Clone)]
pub struct ListView<T> {
    resource: ListResource,
    filter: ListFilter,
    state: ViewState<Vec<T>>,
    pager: Pager,
    issued: u64,
    mounted: bool,
}

impl<T> ListView<T> {
    pub fn new(resource: ListResource) -> Self {
        Self {
            resource,
            filter: ListFilter::new(),
            state: ViewState::Idle,
            pager: resource.pager(),
            issued: 0,
            mounted: false,
        }
    }

    pub fn resource(&self) -> ListResource {
        self.resource
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn state(&self) -> &ViewState<Vec<T>> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Screen opened: issue the initial fetch
    pub fn begin_mount(&mut self) -> Option<FetchTicket> {
        self.mounted = true;
        self.issue()
    }

    /// Filter committed by the user
    ///
    /// Returns `None` when nothing needs fetching: the filter did not change,
    /// or the resource still lacks its required field. A change always goes
    /// back to page 1.
    pub fn begin_filter(&mut self, filter: ListFilter) -> Option<FetchTicket> {
        if self.mounted && filter == self.filter {
            tracing::debug!(resource = %self.resource, "Filter unchanged, skipping fetch");
            return None;
        }
        self.mounted = true;
        self.filter = filter;
        self.pager.reset();
        self.issue()
    }

    /// Fetch again with the current filter (after a create)
    pub fn begin_reload(&mut self) -> Option<FetchTicket> {
        self.issue()
    }

    fn issue(&mut self) -> Option<FetchTicket> {
        if !self.resource.accepts(&self.filter) {
            tracing::debug!(resource = %self.resource, "Required filter missing, not fetching");
            return None;
        }
        self.issued += 1;
        self.state = ViewState::Loading;
        Some(FetchTicket {
            seq: self.issued,
            filter: self.filter.clone(),
        })
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns false when the ticket is stale and the result was dropped.
    pub fn complete(&mut self, ticket: FetchTicket, result: ClientResult<Vec<T>>) -> bool {
        if ticket.seq != self.issued {
            tracing::debug!(
                resource = %self.resource,
                stale = ticket.seq,
                latest = self.issued,
                "Discarding stale response"
            );
            return false;
        }

        self.state = match result {
            Ok(items) => ViewState::Ready(items),
            Err(e) => {
                tracing::warn!(resource = %self.resource, error = %e, "List fetch failed");
                ViewState::Error(e.user_message(Screen::from(self.resource).load_failed_message()))
            }
        };
        true
    }

    /// Show an error that did not come from a fetch (e.g. a rejected create)
    pub fn fail(&mut self, message: impl Into<String>) {
        self.state = ViewState::Error(message.into());
    }

    /// Current page of the loaded items
    pub fn page(&self) -> Page<'_, T> {
        self.pager.slice(self.items())
    }

    pub fn go_to_page(&mut self, page: usize) {
        let len = self.items().len();
        self.pager.go_to(page, len);
    }

    pub fn next_page(&mut self) {
        let len = self.items().len();
        self.pager.next(len);
    }

    pub fn prev_page(&mut self) {
        let len = self.items().len();
        self.pager.prev(len);
    }
}

impl<T: DeserializeOwned> ListView<T> {
    /// Open the screen and run the initial fetch
    pub async fn mount<C: HttpClient>(&mut self, api: &ApiClient<C>) -> bool {
        match self.begin_mount() {
            Some(ticket) => self.run(api, ticket).await,
            None => false,
        }
    }

    /// Commit a filter and fetch if it changed
    pub async fn commit_filter<C: HttpClient>(
        &mut self,
        api: &ApiClient<C>,
        filter: ListFilter,
    ) -> bool {
        match self.begin_filter(filter) {
            Some(ticket) => self.run(api, ticket).await,
            None => false,
        }
    }

    pub async fn reload<C: HttpClient>(&mut self, api: &ApiClient<C>) -> bool {
        match self.begin_reload() {
            Some(ticket) => self.run(api, ticket).await,
            None => false,
        }
    }

    async fn run<C: HttpClient>(&mut self, api: &ApiClient<C>, ticket: FetchTicket) -> bool {
        let result = api.list(self.resource, ticket.filter()).await;
        self.complete(ticket, result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;

    fn reservations() -> ListView<u32> {
        ListView::new(ListResource::Reservations)
    }

    #[test]
    fn stale_ticket_is_discarded() {
        let mut view = reservations();
        let first = view
            .begin_filter(ListFilter::new().with("fecha", "2024-01-01"))
            .unwrap();
        let second = view
            .begin_filter(ListFilter::new().with("fecha", "2024-01-02"))
            .unwrap();

        assert!(view.complete(second, Ok(vec![2])));
        assert!(!view.complete(first, Ok(vec![1])));
        assert_eq!(view.items(), &[2]);
    }

    #[test]
    fn unchanged_filter_does_not_refetch() {
        let mut view = reservations();
        let ticket = view.begin_mount().unwrap();
        view.complete(ticket, Ok(vec![1]));

        assert!(view.begin_filter(ListFilter::new()).is_none());
        assert!(view.begin_filter(ListFilter::new().with("fecha", "  ")).is_none());
        assert!(view
            .begin_filter(ListFilter::new().with("id_cliente", "3"))
            .is_some());
    }

    #[test]
    fn history_waits_for_customer_id() {
        let mut view: ListView<u32> = ListView::new(ListResource::DetailedHistory);
        assert!(view.begin_mount().is_none());
        assert_eq!(view.state(), &ViewState::Idle);

        assert!(view
            .begin_filter(ListFilter::new().with("nombre_plato", "Paella"))
            .is_none());

        let ticket = view
            .begin_filter(ListFilter::new().with("id_cliente_mysql", "7"))
            .unwrap();
        assert_eq!(ticket.filter().get("id_cliente_mysql"), Some("7"));
        assert!(view.state().is_loading());
    }

    #[test]
    fn filter_change_resets_page() {
        let mut view = reservations();
        let ticket = view.begin_mount().unwrap();
        view.complete(ticket, Ok((1..=12).collect()));
        view.go_to_page(3);
        assert_eq!(view.page().data, &[11, 12]);

        let ticket = view
            .begin_filter(ListFilter::new().with("fecha", "2024-01-01"))
            .unwrap();
        view.complete(ticket, Ok((1..=12).collect()));
        assert_eq!(view.page().page, 1);
        assert_eq!(view.page().data, &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn failed_fetch_shows_screen_message() {
        let mut view = reservations();
        let ticket = view.begin_mount().unwrap();
        view.complete(ticket, Err(ClientError::Transport("refused".into())));
        assert_eq!(view.state().error(), Some("No se pudieron cargar las reservas."));
        assert!(view.items().is_empty());
    }
}
