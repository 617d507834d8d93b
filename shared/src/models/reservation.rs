//! Reservation Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::util::validate_id;

/// Status given to every new reservation
pub const RESERVATION_PENDING: &str = "Pendiente";

/// Largest party a single table booking accepts
pub const MAX_PARTY_SIZE: u32 = 50;

/// Reservation entity (reserva)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "id_reserva")]
    pub id: i64,
    #[serde(
        rename = "id_cliente",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub customer_id: i64,
    #[serde(
        rename = "id_mesa",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub table_id: i64,
    /// Raw backend date (`YYYY-MM-DD` or a full timestamp)
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
    #[serde(
        rename = "numero_personas",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub party_size: u32,
    #[serde(rename = "estado", default)]
    pub status: String,
}

/// Create reservation payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReservationCreate {
    #[serde(rename = "id_cliente")]
    pub customer_id: i64,
    #[serde(rename = "id_mesa")]
    pub table_id: i64,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora", serialize_with = "serialize_hour_minute")]
    pub time: NaiveTime,
    #[serde(rename = "numero_personas")]
    pub party_size: u32,
    #[serde(rename = "estado")]
    pub status: String,
}

impl ReservationCreate {
    pub fn new(
        customer_id: i64,
        table_id: i64,
        date: NaiveDate,
        time: NaiveTime,
        party_size: u32,
    ) -> DomainResult<Self> {
        validate_id(customer_id, "id_cliente")?;
        validate_id(table_id, "id_mesa")?;
        if party_size == 0 {
            return Err(DomainError::validation(
                "numero_personas",
                "party size must be at least 1",
            ));
        }
        if party_size > MAX_PARTY_SIZE {
            return Err(DomainError::validation(
                "numero_personas",
                format!("party size exceeds maximum allowed ({MAX_PARTY_SIZE}), got {party_size}"),
            ));
        }

        Ok(Self {
            customer_id,
            table_id,
            date,
            time,
            party_size,
            status: RESERVATION_PENDING.to_string(),
        })
    }

    /// `fecha` as sent on the wire
    pub fn date_param(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `hora` as sent on the wire
    pub fn time_param(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}

fn serialize_hour_minute<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(&time.format("%H:%M"))
}
