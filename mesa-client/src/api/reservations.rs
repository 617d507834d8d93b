use chrono::{NaiveDate, NaiveTime};
use shared::intent::ReservationFilter;
use shared::models::{Reservation, ReservationCreate};
use shared::{ListFilter, ListResource};

use super::ApiClient;
use crate::{ClientResult, HttpClient};

pub(crate) const AVAILABILITY_PATH: &str = "/api/mesas/disponibilidad";

impl<C: HttpClient> ApiClient<C> {
    pub async fn list_reservations(
        &self,
        filter: &ReservationFilter,
    ) -> ClientResult<Vec<Reservation>> {
        self.list(ListResource::Reservations, &ListFilter::from(filter))
            .await
    }

    /// Raw availability probe; a 2xx answer means the table is free
    ///
    /// Prefer [`crate::ReservationGate::check_availability`], which fails closed.
    pub async fn probe_table(
        &self,
        table_id: i64,
        date: NaiveDate,
        time: NaiveTime,
    ) -> ClientResult<()> {
        let path = ListFilter::new()
            .with("id_mesa", table_id.to_string())
            .with("fecha", date.format("%Y-%m-%d").to_string())
            .with("hora", time.format("%H:%M").to_string())
            .apply_to(AVAILABILITY_PATH);
        self.http.probe(&path).await
    }

    /// Unconditional write; use [`crate::ReservationGate::create_reservation`]
    /// to check availability first
    pub(crate) async fn post_reservation(
        &self,
        reservation: &ReservationCreate,
    ) -> ClientResult<()> {
        self.http
            .post(ListResource::Reservations.path(), reservation)
            .await
    }
}
