//! Screen state
//!
//! Each dashboard screen owns a small state container. Network calls are
//! triggered by explicit handlers ("filter committed", "reload after
//! create"), never implicitly.

mod list;

pub use list::{FetchTicket, ListView};

use shared::ListResource;

/// State of one screen
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// Terminal until the next successful fetch
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Dashboard screens and their user-facing failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Reservations,
    Menu,
    Orders,
    Reviews,
    Preferences,
    History,
}

impl Screen {
    pub fn load_failed_message(self) -> &'static str {
        match self {
            Screen::Reservations => "No se pudieron cargar las reservas.",
            Screen::Menu => "No se pudieron cargar los platos.",
            Screen::Orders => "No se pudieron cargar los pedidos.",
            Screen::Reviews => "No se pudieron cargar las opiniones.",
            Screen::Preferences => "No se pudieron cargar las preferencias del cliente.",
            Screen::History => "No se pudo cargar el historial detallado.",
        }
    }
}

/// Dashboard write forms and the message shown when the backend refuses them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Reservation,
    Dish,
    Order,
    OrderStatus,
    Review,
    Preferences,
}

impl Form {
    pub fn failed_message(self) -> &'static str {
        match self {
            Form::Reservation => "No se pudo crear la reserva.",
            Form::Dish => "No se pudo agregar el plato.",
            Form::Order => "No se pudo agregar el pedido.",
            Form::OrderStatus => "No se pudo actualizar el estado del pedido.",
            Form::Review => "No se pudo agregar la opinión.",
            Form::Preferences => "No se pudieron guardar las preferencias.",
        }
    }
}

/// Shown when the dish picker of the order/review screens cannot load
pub const DISHES_UNAVAILABLE_MESSAGE: &str = "No se pudieron cargar los platos disponibles.";

impl From<ListResource> for Screen {
    fn from(resource: ListResource) -> Self {
        match resource {
            ListResource::Reservations => Screen::Reservations,
            ListResource::Menu => Screen::Menu,
            ListResource::Orders => Screen::Orders,
            ListResource::Reviews => Screen::Reviews,
            ListResource::DetailedHistory => Screen::History,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_accessors() {
        let ready: ViewState<Vec<u8>> = ViewState::Ready(vec![1]);
        assert_eq!(ready.data(), Some(&vec![1]));
        assert_eq!(ready.error(), None);

        let failed: ViewState<Vec<u8>> = ViewState::Error("x".into());
        assert_eq!(failed.error(), Some("x"));
        assert!(ViewState::<()>::Loading.is_loading());
        assert_eq!(ViewState::<()>::default(), ViewState::Idle);
    }

    #[test]
    fn history_resource_maps_to_history_screen() {
        assert_eq!(Screen::from(ListResource::DetailedHistory), Screen::History);
        assert_eq!(
            Screen::from(ListResource::Reservations).load_failed_message(),
            "No se pudieron cargar las reservas."
        );
    }

    #[test]
    fn write_forms_have_their_own_messages() {
        assert_eq!(
            Form::OrderStatus.failed_message(),
            "No se pudo actualizar el estado del pedido."
        );
        assert_eq!(Form::Reservation.failed_message(), "No se pudo crear la reserva.");
        assert_ne!(Form::Dish.failed_message(), Screen::Menu.load_failed_message());
    }
}
