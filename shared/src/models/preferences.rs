//! Customer Preferences Model

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::util::{split_list, validate_id};

/// Dietary preferences of one customer, keyed 1:1 by customer id
///
/// The same shape is read and written; saving is create-or-update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerPreferences {
    #[serde(
        rename = "id_cliente_mysql",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub customer_id: i64,
    #[serde(rename = "alergias", default)]
    pub allergies: BTreeSet<String>,
    #[serde(rename = "preferencias_alimentarias", default)]
    pub dietary_preferences: BTreeSet<String>,
    #[serde(rename = "restricciones_dieteticas", default)]
    pub dietary_restrictions: BTreeSet<String>,
    #[serde(rename = "comidas_favoritas", default)]
    pub favorite_dishes: BTreeSet<String>,
}

impl CustomerPreferences {
    /// Blank record for a customer without stored preferences
    pub fn empty(customer_id: i64) -> Self {
        Self {
            customer_id,
            ..Default::default()
        }
    }

    /// Build from comma separated form fields
    pub fn from_lists(
        customer_id: i64,
        allergies: &str,
        dietary_preferences: &str,
        dietary_restrictions: &str,
        favorite_dishes: &str,
    ) -> DomainResult<Self> {
        validate_id(customer_id, "id_cliente_mysql")?;
        Ok(Self {
            customer_id,
            allergies: split_list(allergies).into_iter().collect(),
            dietary_preferences: split_list(dietary_preferences).into_iter().collect(),
            dietary_restrictions: split_list(dietary_restrictions).into_iter().collect(),
            favorite_dishes: split_list(favorite_dishes).into_iter().collect(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.allergies.is_empty()
            && self.dietary_preferences.is_empty()
            && self.dietary_restrictions.is_empty()
            && self.favorite_dishes.is_empty()
    }
}
