//! Detailed History Model
//!
//! One record per past order of a customer, joined with the dishes and the
//! review left for it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDish {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryOpinion {
    #[serde(
        rename = "calificacion",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub rating: u8,
    #[serde(rename = "comentario", default)]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(
        rename = "id_pedido_mysql",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub order_id: i64,
    #[serde(
        rename = "id_cliente_mysql",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub customer_id: i64,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "platos", default)]
    pub dishes: Vec<HistoryDish>,
    #[serde(default)]
    pub opinion: Option<HistoryOpinion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn opinion_is_optional() {
        let records: Vec<HistoryRecord> = serde_json::from_value(json!([
            {
                "_id": "a1", "id_pedido_mysql": 10, "id_cliente_mysql": 4,
                "fecha": "2024-02-01", "total": 30.5,
                "platos": [{ "nombre": "Paella", "cantidad": 2 }],
                "opinion": { "calificacion": 5, "comentario": "Excelente" }
            },
            {
                "_id": "a2", "id_pedido_mysql": 11, "id_cliente_mysql": 4,
                "fecha": "2024-02-03", "total": "8", "platos": [], "opinion": null
            }
        ]))
        .unwrap();

        assert_eq!(records[0].opinion.as_ref().map(|o| o.rating), Some(5));
        assert!(records[1].opinion.is_none());
        assert_eq!(records[1].total, Decimal::from(8));
    }
}
