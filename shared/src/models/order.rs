//! Order Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status (estado del pedido)
///
/// Transitions are not validated client-side; the backend decides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "En preparación")]
    Preparing,
    #[serde(rename = "Preparado")]
    Prepared,
    #[serde(rename = "Entregado")]
    Delivered,
    #[serde(rename = "Cancelado")]
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Preparing,
        OrderStatus::Prepared,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Label used on the wire
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Preparing => "En preparación",
            OrderStatus::Prepared => "Preparado",
            OrderStatus::Delivered => "Entregado",
            OrderStatus::Cancelled => "Cancelado",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Dish line as listed under an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDish {
    #[serde(rename = "nombre_plato")]
    pub dish_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
}

/// Order entity (pedido) as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(rename = "id_pedido")]
    pub id: i64,
    #[serde(
        rename = "id_cliente",
        deserialize_with = "crate::models::serde_helpers::number_or_string"
    )]
    pub customer_id: i64,
    #[serde(rename = "fecha_pedido", default)]
    pub order_date: Option<String>,
    /// Status label; kept as text so unknown labels still render
    #[serde(rename = "estado", default)]
    pub status: String,
    #[serde(default)]
    pub total: Decimal,
    #[serde(rename = "detalles_platos", default)]
    pub dishes: Vec<OrderDish>,
}

/// One line of the create payload (detalle)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineDetail {
    #[serde(rename = "id_plato")]
    pub menu_item_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(
        rename = "precio_unitario",
        serialize_with = "rust_decimal::serde::float::serialize"
    )]
    pub unit_price: Decimal,
}

/// Create order payload
///
/// Built by [`crate::order::OrderComposer::build`], which derives `total`
/// from `details`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCreate {
    #[serde(rename = "id_cliente")]
    pub customer_id: i64,
    #[serde(rename = "fecha_pedido")]
    pub order_date: NaiveDate,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total: Decimal,
    #[serde(rename = "estado_pedido")]
    pub status: OrderStatus,
    #[serde(rename = "detalles")]
    pub details: Vec<OrderLineDetail>,
}

/// Update status payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderStatusUpdate {
    #[serde(rename = "estado")]
    pub status: OrderStatus,
}
