//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::util::{validate_required_text, validate_text_len, MAX_NAME_LEN, MAX_NOTE_LEN};

/// Dish on the menu (plato)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "id_plato")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Accepts JSON numbers and decimal strings
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "categoria", default)]
    pub category: String,
    #[serde(
        rename = "disponibilidad",
        default = "default_available",
        deserialize_with = "crate::models::serde_helpers::flexible_bool"
    )]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl MenuItem {
    /// Only available dishes are offered by the order and review pickers
    pub fn is_orderable(&self) -> bool {
        self.available
    }
}

/// Dishes a picker should offer
pub fn orderable_items(items: &[MenuItem]) -> impl Iterator<Item = &MenuItem> {
    items.iter().filter(|item| item.is_orderable())
}

/// Create dish payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItemCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio", serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "disponibilidad")]
    pub available: bool,
}

impl MenuItemCreate {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
        available: bool,
    ) -> DomainResult<Self> {
        let name = name.into().trim().to_string();
        let description = description.into().trim().to_string();
        let category = category.into().trim().to_string();

        validate_required_text(&name, "nombre", MAX_NAME_LEN)?;
        validate_text_len(&description, "descripcion", MAX_NOTE_LEN)?;
        validate_required_text(&category, "categoria", MAX_NAME_LEN)?;
        if price < Decimal::ZERO {
            return Err(DomainError::validation(
                "precio",
                format!("must be non-negative, got {price}"),
            ));
        }

        Ok(Self {
            name,
            description,
            price,
            category,
            available,
        })
    }
}
