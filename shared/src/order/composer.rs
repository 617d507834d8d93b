//! Order Composer
//!
//! Accumulates selected dishes for a new order. The unit price is copied from
//! the catalog at selection time so later catalog edits do not move the
//! total of an order being composed.
//!
//! Adding the same dish twice yields two independent lines; quantities are
//! not merged.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::money::{line_total, order_total, validate_quantity};
use crate::error::{DomainError, DomainResult};
use crate::models::{MenuItem, OrderCreate, OrderLineDetail, OrderStatus};
use crate::util::validate_id;

/// Identifies a line inside one composer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct LineId(u64);

impl LineId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for LineId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selected dish with frozen unit price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub line_id: LineId,
    pub menu_item_id: i64,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl OrderLine {
    pub fn line_total(&self) -> Decimal {
        line_total(self.unit_price, self.quantity)
    }
}

/// In-memory order being composed
#[derive(Debug, Clone, Default)]
pub struct OrderComposer {
    lines: Vec<OrderLine>,
    next_line: u64,
}

impl OrderComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new line with quantity 1
    ///
    /// Dishes marked as not available are refused.
    pub fn add_item(&mut self, item: &MenuItem) -> DomainResult<LineId> {
        if !item.is_orderable() {
            return Err(DomainError::ItemUnavailable(item.id));
        }

        self.next_line += 1;
        let line_id = LineId(self.next_line);
        self.lines.push(OrderLine {
            line_id,
            menu_item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: 1,
        });

        tracing::debug!(line = %line_id, menu_item = item.id, price = %item.price, "Line added");
        Ok(line_id)
    }

    /// Change the quantity of one line
    ///
    /// Non-positive quantities are rejected and leave the line untouched.
    pub fn set_quantity(&mut self, line_id: LineId, quantity: i64) -> DomainResult<()> {
        let quantity = validate_quantity(quantity)?;
        let line = self
            .lines
            .iter_mut()
            .find(|l| l.line_id == line_id)
            .ok_or(DomainError::UnknownLine(line_id.0))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Drop one line
    pub fn remove_line(&mut self, line_id: LineId) -> DomainResult<OrderLine> {
        let idx = self
            .lines
            .iter()
            .position(|l| l.line_id == line_id)
            .ok_or(DomainError::UnknownLine(line_id.0))?;
        Ok(self.lines.remove(idx))
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of unit_price * quantity over the current lines
    pub fn total(&self) -> Decimal {
        order_total(self.lines.iter().map(|l| (l.unit_price, l.quantity)))
    }

    /// Empty the composer after a successful submission
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Build the create payload for the order endpoint
    pub fn build(&self, customer_id: i64, order_date: NaiveDate) -> DomainResult<OrderCreate> {
        validate_id(customer_id, "id_cliente")?;
        if self.lines.is_empty() {
            return Err(DomainError::EmptyOrder);
        }

        Ok(OrderCreate {
            customer_id,
            order_date,
            total: self.total(),
            status: OrderStatus::Preparing,
            details: self
                .lines
                .iter()
                .map(|l| OrderLineDetail {
                    menu_item_id: l.menu_item_id,
                    quantity: l.quantity,
                    unit_price: l.unit_price,
                })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn dish(id: i64, price: &str) -> MenuItem {
        MenuItem {
            id,
            name: format!("Plato {id}"),
            description: String::new(),
            price: Decimal::from_str(price).unwrap(),
            category: "Principal".into(),
            available: true,
        }
    }

    fn expected_total(composer: &OrderComposer) -> Decimal {
        composer
            .lines()
            .iter()
            .map(|l| l.unit_price * Decimal::from(l.quantity))
            .sum()
    }

    #[test]
    fn total_tracks_every_mutation() {
        let mut composer = OrderComposer::new();
        assert_eq!(composer.total(), Decimal::ZERO);

        let a = composer.add_item(&dish(1, "12.50")).unwrap();
        assert_eq!(composer.total(), Decimal::from_str("12.50").unwrap());

        let b = composer.add_item(&dish(2, "3.25")).unwrap();
        composer.set_quantity(a, 2).unwrap();
        composer.set_quantity(b, 4).unwrap();
        assert_eq!(composer.total(), Decimal::from_str("38.00").unwrap());
        assert_eq!(composer.total(), expected_total(&composer));

        composer.remove_line(a).unwrap();
        assert_eq!(composer.total(), Decimal::from(13));
        assert_eq!(composer.total(), expected_total(&composer));
    }

    #[test]
    fn invariant_holds_over_mixed_sequence() {
        let prices = ["1.10", "0.35", "19.99", "7", "2.05"];
        let mut composer = OrderComposer::new();
        let mut ids = Vec::new();

        for (step, price) in prices.iter().cycle().take(25).enumerate() {
            ids.push(composer.add_item(&dish(step as i64 + 1, price)).unwrap());
            let target = ids[(step * 7) % ids.len()];
            let _ = composer.set_quantity(target, (step as i64 % 5) - 1);
            assert_eq!(composer.total(), expected_total(&composer));
        }
    }

    #[test]
    fn duplicate_selection_creates_independent_lines() {
        let mut composer = OrderComposer::new();
        let paella = dish(1, "10");
        let first = composer.add_item(&paella).unwrap();
        let second = composer.add_item(&paella).unwrap();

        assert_ne!(first, second);
        assert_eq!(composer.lines().len(), 2);

        composer.set_quantity(second, 3).unwrap();
        assert_eq!(composer.lines()[0].quantity, 1);
        assert_eq!(composer.lines()[1].quantity, 3);
        assert_eq!(composer.total(), Decimal::from(40));
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        let mut composer = OrderComposer::new();
        let line = composer.add_item(&dish(1, "5")).unwrap();

        assert!(composer.set_quantity(line, 0).is_err());
        assert!(composer.set_quantity(line, -2).is_err());
        assert_eq!(composer.lines()[0].quantity, 1);
        assert_eq!(composer.total(), Decimal::from(5));
    }

    #[test]
    fn unknown_line_is_rejected() {
        let mut composer = OrderComposer::new();
        assert_eq!(
            composer.set_quantity(LineId::from(42), 1),
            Err(DomainError::UnknownLine(42))
        );
    }

    #[test]
    fn unit_price_is_frozen_at_selection() {
        let mut composer = OrderComposer::new();
        let mut item = dish(1, "9.00");
        composer.add_item(&item).unwrap();

        item.price = Decimal::from(15);
        assert_eq!(composer.total(), Decimal::from(9));
    }

    #[test]
    fn unavailable_dish_is_refused() {
        let mut composer = OrderComposer::new();
        let mut item = dish(5, "4");
        item.available = false;
        assert_eq!(composer.add_item(&item), Err(DomainError::ItemUnavailable(5)));
        assert!(composer.is_empty());
    }

    #[test]
    fn build_payload() {
        let mut composer = OrderComposer::new();
        let line = composer.add_item(&dish(3, "12.50")).unwrap();
        composer.set_quantity(line, 2).unwrap();
        composer.add_item(&dish(8, "4.25")).unwrap();

        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let order = composer.build(21, date).unwrap();
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({
                "id_cliente": 21,
                "fecha_pedido": "2024-01-15",
                "total": 29.25,
                "estado_pedido": "En preparación",
                "detalles": [
                    { "id_plato": 3, "cantidad": 2, "precio_unitario": 12.5 },
                    { "id_plato": 8, "cantidad": 1, "precio_unitario": 4.25 }
                ]
            })
        );
    }

    #[test]
    fn empty_order_cannot_be_built() {
        let composer = OrderComposer::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(composer.build(1, date), Err(DomainError::EmptyOrder));
    }
}
