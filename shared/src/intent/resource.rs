//! Listing endpoints and their typed filters

use chrono::NaiveDate;

use super::filter::ListFilter;
use super::page::{Pager, DEFAULT_PAGE_SIZE};
use crate::models::VisitType;

/// A list screen's backing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListResource {
    Reservations,
    Menu,
    Orders,
    Reviews,
    DetailedHistory,
}

impl ListResource {
    pub fn path(self) -> &'static str {
        match self {
            ListResource::Reservations => "/api/reservas",
            ListResource::Menu => "/api/platos",
            ListResource::Orders => "/api/pedidos",
            ListResource::Reviews => "/api/opiniones",
            ListResource::DetailedHistory => "/api/historial-detallado",
        }
    }

    /// Filter fields accepted by the endpoint, in query order
    pub fn filter_fields(self) -> &'static [&'static str] {
        match self {
            ListResource::Reservations | ListResource::Orders => &["fecha", "id_cliente"],
            ListResource::Menu => &["nombre", "categoria", "disponible"],
            ListResource::Reviews => &["tipo_visita", "calificacion_estrellas", "nombre_plato"],
            ListResource::DetailedHistory => {
                &["id_cliente_mysql", "nombre_plato", "fecha_inicio", "fecha_fin"]
            }
        }
    }

    /// Field that must be non-empty before the list is fetched at all
    pub fn required_field(self) -> Option<&'static str> {
        match self {
            ListResource::DetailedHistory => Some("id_cliente_mysql"),
            _ => None,
        }
    }

    /// Pagination used by the screen
    pub fn pager(self) -> Pager {
        match self {
            ListResource::Reservations | ListResource::Menu => Pager::new(DEFAULT_PAGE_SIZE),
            _ => Pager::unbounded(),
        }
    }

    /// Whether a filter satisfies [`ListResource::required_field`]
    pub fn accepts(self, filter: &ListFilter) -> bool {
        self.required_field()
            .is_none_or(|field| filter.get(field).is_some())
    }
}

impl std::fmt::Display for ListResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ListResource::Reservations => "reservations",
            ListResource::Menu => "menu",
            ListResource::Orders => "orders",
            ListResource::Reviews => "reviews",
            ListResource::DetailedHistory => "history",
        };
        f.write_str(name)
    }
}

fn date_value(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format("%Y-%m-%d").to_string())
}

/// Filter of the reservations screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationFilter {
    pub date: Option<NaiveDate>,
    pub customer_id: Option<String>,
}

impl From<&ReservationFilter> for ListFilter {
    fn from(f: &ReservationFilter) -> Self {
        ListFilter::new()
            .with_opt("fecha", date_value(f.date))
            .with_opt("id_cliente", f.customer_id.as_deref())
    }
}

/// Filter of the menu screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuFilter {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl From<&MenuFilter> for ListFilter {
    fn from(f: &MenuFilter) -> Self {
        ListFilter::new()
            .with_opt("nombre", f.name.as_deref())
            .with_opt("categoria", f.category.as_deref())
            .with_opt("disponible", f.available)
    }
}

/// Filter of the orders screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub date: Option<NaiveDate>,
    pub customer_id: Option<String>,
}

impl From<&OrderFilter> for ListFilter {
    fn from(f: &OrderFilter) -> Self {
        ListFilter::new()
            .with_opt("fecha", date_value(f.date))
            .with_opt("id_cliente", f.customer_id.as_deref())
    }
}

/// Filter of the reviews screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewFilter {
    pub visit_type: Option<VisitType>,
    pub stars: Option<u8>,
    pub dish_name: Option<String>,
}

impl From<&ReviewFilter> for ListFilter {
    fn from(f: &ReviewFilter) -> Self {
        ListFilter::new()
            .with_opt("tipo_visita", f.visit_type.map(VisitType::as_str))
            .with_opt("calificacion_estrellas", f.stars)
            .with_opt("nombre_plato", f.dish_name.as_deref())
    }
}

/// Filter of the detailed history screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    pub customer_id: Option<String>,
    pub dish_name: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl From<&HistoryFilter> for ListFilter {
    fn from(f: &HistoryFilter) -> Self {
        ListFilter::new()
            .with_opt("id_cliente_mysql", f.customer_id.as_deref())
            .with_opt("nombre_plato", f.dish_name.as_deref())
            .with_opt("fecha_inicio", date_value(f.from))
            .with_opt("fecha_fin", date_value(f.to))
    }
}
