//! Review Model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::util::{validate_id, validate_text_len, MAX_NOTE_LEN};

/// How the customer consumed the food
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VisitType {
    /// In the restaurant
    #[default]
    Presencial,
    /// Delivered at home
    Domicilio,
}

impl VisitType {
    pub fn as_str(self) -> &'static str {
        match self {
            VisitType::Presencial => "presencial",
            VisitType::Domicilio => "domicilio",
        }
    }
}

impl std::str::FromStr for VisitType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "presencial" => Ok(VisitType::Presencial),
            "domicilio" => Ok(VisitType::Domicilio),
            other => Err(DomainError::validation(
                "tipo_visita",
                format!("unknown visit type '{other}'"),
            )),
        }
    }
}

/// Dish reference inside a listed review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumedDish {
    #[serde(rename = "nombre")]
    pub name: String,
}

/// Review entity (opinión) as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(
        rename = "id_cliente",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub customer_id: i64,
    #[serde(
        rename = "calificacion",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub rating: u8,
    #[serde(rename = "comentario", default)]
    pub comment: String,
    /// Kept as text; older records may carry values outside [`VisitType`]
    #[serde(rename = "tipo_visita", default)]
    pub visit_type: String,
    #[serde(rename = "platos_consumidos", default)]
    pub consumed: Vec<ConsumedDish>,
}

/// Create review payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewCreate {
    #[serde(rename = "id_cliente")]
    pub customer_id: i64,
    #[serde(rename = "calificacion")]
    pub rating: u8,
    #[serde(rename = "comentario")]
    pub comment: String,
    #[serde(rename = "tipo_visita")]
    pub visit_type: VisitType,
    /// Menu item ids
    #[serde(rename = "platos_consumidos")]
    pub consumed_items: BTreeSet<i64>,
}

impl ReviewCreate {
    pub const MIN_RATING: u8 = 1;
    pub const MAX_RATING: u8 = 5;

    pub fn new(
        customer_id: i64,
        rating: u8,
        comment: impl Into<String>,
        visit_type: VisitType,
        consumed_items: impl IntoIterator<Item = i64>,
    ) -> DomainResult<Self> {
        validate_id(customer_id, "id_cliente")?;
        if !(Self::MIN_RATING..=Self::MAX_RATING).contains(&rating) {
            return Err(DomainError::validation(
                "calificacion",
                format!(
                    "rating must be between {} and {}, got {rating}",
                    Self::MIN_RATING,
                    Self::MAX_RATING
                ),
            ));
        }
        let comment = comment.into().trim().to_string();
        validate_text_len(&comment, "comentario", MAX_NOTE_LEN)?;

        Ok(Self {
            customer_id,
            rating,
            comment,
            visit_type,
            consumed_items: consumed_items.into_iter().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rating_bounds() {
        assert!(ReviewCreate::new(1, 0, "", VisitType::Presencial, []).is_err());
        assert!(ReviewCreate::new(1, 6, "", VisitType::Presencial, []).is_err());
        assert!(ReviewCreate::new(1, 5, "", VisitType::Presencial, []).is_ok());
    }

    #[test]
    fn consumed_items_are_a_set() {
        let review =
            ReviewCreate::new(9, 4, " Muy rico ", VisitType::Domicilio, [3, 1, 3]).unwrap();
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({
                "id_cliente": 9,
                "calificacion": 4,
                "comentario": "Muy rico",
                "tipo_visita": "domicilio",
                "platos_consumidos": [1, 3]
            })
        );
    }

    #[test]
    fn visit_type_parse() {
        assert_eq!("Presencial".parse::<VisitType>().unwrap(), VisitType::Presencial);
        assert_eq!("domicilio".parse::<VisitType>().unwrap(), VisitType::Domicilio);
        assert!("terraza".parse::<VisitType>().is_err());
    }

    #[test]
    fn listed_review_accepts_text_ids() {
        let reviews: Vec<Review> = serde_json::from_value(json!([
            { "_id": "r1", "id_cliente": "5", "calificacion": "4", "comentario": "Rico",
              "tipo_visita": "presencial", "platos_consumidos": [{ "nombre": "Paella" }] },
            { "_id": "r2", "id_cliente": 6, "calificacion": 5 }
        ]))
        .unwrap();
        assert_eq!((reviews[0].customer_id, reviews[0].rating), (5, 4));
        assert_eq!(reviews[1].customer_id, 6);
        assert!(reviews[1].consumed.is_empty());
    }
}
