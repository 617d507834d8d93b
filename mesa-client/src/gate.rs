//! Reservation Gate
//!
//! A reservation is only written after the availability probe confirms the
//! table. The probe and the write are two requests; the backend has the final
//! word on acceptance.

use chrono::{NaiveDate, NaiveTime};
use shared::models::{Reservation, ReservationCreate};

use crate::view::{Form, ListView};
use crate::{ApiClient, ClientError, ClientResult, HttpClient, write_outcome};

pub struct ReservationGate<'a, C> {
    api: &'a ApiClient<C>,
}

impl<'a, C: HttpClient> ReservationGate<'a, C> {
    pub fn new(api: &'a ApiClient<C>) -> Self {
        Self { api }
    }

    /// True only on an explicit success from the probe
    ///
    /// Non-2xx answers and transport failures both read as "unavailable".
    pub async fn check_availability(&self, table_id: i64, date: NaiveDate, time: NaiveTime) -> bool {
        match self.api.probe_table(table_id, date, time).await {
            Ok(()) => true,
            Err(e) => {
                tracing::info!(table = table_id, %date, %time, reason = %e, "Table not available");
                false
            }
        }
    }

    /// Probe, then write
    pub async fn create_reservation(&self, input: &ReservationCreate) -> ClientResult<()> {
        if !self
            .check_availability(input.table_id, input.date, input.time)
            .await
        {
            return Err(ClientError::TableUnavailable {
                table_id: input.table_id,
                date: input.date_param(),
                time: input.time_param(),
            });
        }

        let result = self.api.post_reservation(input).await;
        crate::audit_log!(
            "create",
            "reserva",
            write_outcome(&result),
            format!(
                "mesa {}, cliente {}, {} {}",
                input.table_id,
                input.customer_id,
                input.date_param(),
                input.time_param()
            )
        );
        result
    }

    /// Screen handler: create, then refresh the reservations list
    ///
    /// On failure the view shows the error and no reload happens.
    pub async fn submit_reservation(
        &self,
        view: &mut ListView<Reservation>,
        input: &ReservationCreate,
    ) -> bool {
        match self.create_reservation(input).await {
            Ok(()) => {
                view.reload(self.api).await;
                true
            }
            Err(e) => {
                view.fail(e.user_message(Form::Reservation.failed_message()));
                false
            }
        }
    }
}
