use chrono::{Local, NaiveDate};
use clap::Subcommand;
use mesa_client::models::{MenuItem, Order, OrderStatus};
use mesa_client::view::{DISHES_UNAVAILABLE_MESSAGE, Form};
use mesa_client::{ApiClient, HttpClient, ListFilter, ListResource, ListView, OrderComposer};
use shared::intent::OrderFilter;
use shared::util::{format_date, format_money};

use super::{fail, parse_date, show_page};

#[derive(Subcommand)]
pub enum OrdersCommand {
    /// List orders
    List {
        /// Only this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Only this customer
        #[arg(long)]
        customer: Option<String>,
    },

    /// Place an order
    Create {
        #[arg(long)]
        customer: i64,

        /// Order date (YYYY-MM-DD), today by default
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Dish and quantity as ID:QTY; repeat for more lines
        #[arg(long = "item", value_parser = parse_item, required = true)]
        items: Vec<(i64, i64)>,
    },

    /// Change the status of an order
    Status {
        #[arg(long)]
        id: i64,

        /// "En preparación", "Preparado", "Entregado" or "Cancelado"
        #[arg(long, value_parser = parse_status)]
        status: OrderStatus,
    },
}

/// `ID:QTY`, or just `ID` for one unit
fn parse_item(value: &str) -> Result<(i64, i64), String> {
    let (id, quantity) = value.split_once(':').unwrap_or((value, "1"));
    let id = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid dish id in '{value}'"))?;
    let quantity = quantity
        .trim()
        .parse()
        .map_err(|_| format!("invalid quantity in '{value}'"))?;
    Ok((id, quantity))
}

fn parse_status(value: &str) -> Result<OrderStatus, String> {
    OrderStatus::from_label(value.trim()).ok_or_else(|| {
        let labels: Vec<&str> = OrderStatus::ALL.iter().map(|s| s.label()).collect();
        format!("unknown status '{value}', expected one of: {}", labels.join(", "))
    })
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, cmd: OrdersCommand) -> anyhow::Result<()> {
    let mut view: ListView<Order> = ListView::new(ListResource::Orders);

    match cmd {
        OrdersCommand::List { date, customer } => {
            let filter = OrderFilter {
                date,
                customer_id: customer,
            };
            view.commit_filter(api, ListFilter::from(&filter)).await;
        }
        OrdersCommand::Create {
            customer,
            date,
            items,
        } => {
            let menu = api
                .all_menu_items()
                .await
                .map_err(|e| fail(e, DISHES_UNAVAILABLE_MESSAGE))?;
            let composer = compose(&menu, &items)?;

            for line in composer.lines() {
                println!(
                    "  {} x{}  {}",
                    line.name,
                    line.quantity,
                    format_money(line.line_total())
                );
            }
            println!("  Total: {}", format_money(composer.total()));

            let order_date = date.unwrap_or_else(|| Local::now().date_naive());
            let payload = composer.build(customer, order_date)?;
            api.create_order(&payload)
                .await
                .map_err(|e| fail(e, Form::Order.failed_message()))?;
            println!("Pedido agregado.");
            view.mount(api).await;
        }
        OrdersCommand::Status { id, status } => {
            api.update_order_status(id, status)
                .await
                .map_err(|e| fail(e, Form::OrderStatus.failed_message()))?;
            println!("Pedido #{id}: {status}");
            view.mount(api).await;
        }
    }

    show_page(&view, "", "No hay pedidos.", print_order)
}

/// One line per `(dish id, quantity)` pair, in the order given
fn compose(menu: &[MenuItem], items: &[(i64, i64)]) -> anyhow::Result<OrderComposer> {
    let mut composer = OrderComposer::new();
    for &(dish_id, quantity) in items {
        let Some(item) = menu.iter().find(|item| item.id == dish_id) else {
            anyhow::bail!("El plato #{dish_id} no existe.");
        };
        let line = composer.add_item(item)?;
        composer.set_quantity(line, quantity)?;
    }
    Ok(composer)
}

fn print_order(order: &Order) {
    let date = order.order_date.as_deref().map(format_date).unwrap_or_default();
    println!(
        "#{:<5} cliente {:<5} {:<10} {:>9}  [{}]",
        order.id,
        order.customer_id,
        date,
        format_money(order.total),
        order.status
    );
    for dish in &order.dishes {
        println!("        {} x{}", dish.dish_name, dish.quantity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mesa_client::ClientResult;
    use rust_decimal::Decimal;
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    /// Accepts every write and answers every listing with one pending order
    #[derive(Default)]
    struct Backend {
        calls: Mutex<Vec<String>>,
    }

    impl Backend {
        fn record(&self, method: &str, path: &str) {
            self.calls.lock().unwrap().push(format!("{method} {path}"));
        }
    }

    #[async_trait]
    impl HttpClient for Backend {
        async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            self.record("GET", path);
            Ok(serde_json::from_value(serde_json::json!([{
                "id_pedido": 17, "id_cliente": 5, "fecha_pedido": "2024-06-01",
                "total": 12.5, "estado": "Entregado", "detalles_platos": []
            }]))?)
        }

        async fn probe(&self, path: &str) -> ClientResult<()> {
            self.record("GET", path);
            Ok(())
        }

        async fn post<B: Serialize + Sync>(&self, path: &str, _body: &B) -> ClientResult<()> {
            self.record("POST", path);
            Ok(())
        }

        async fn put<B: Serialize + Sync>(&self, path: &str, _body: &B) -> ClientResult<()> {
            self.record("PUT", path);
            Ok(())
        }
    }

    fn dish(id: i64, price: i64, available: bool) -> MenuItem {
        MenuItem {
            id,
            name: format!("Plato {id}"),
            description: String::new(),
            price: Decimal::new(price, 2),
            category: "Principales".into(),
            available,
        }
    }

    #[test]
    fn item_argument_defaults_to_one_unit() {
        assert_eq!(parse_item("4:3"), Ok((4, 3)));
        assert_eq!(parse_item("4"), Ok((4, 1)));
        assert!(parse_item("x:2").is_err());
    }

    #[test]
    fn status_argument_uses_labels() {
        assert_eq!(parse_status("Entregado"), Ok(OrderStatus::Delivered));
        assert!(parse_status("Perdido").is_err());
    }

    #[test]
    fn compose_keeps_repeated_dishes_as_lines() {
        let menu = vec![dish(1, 1250, true), dish(2, 400, true)];
        let composer = compose(&menu, &[(1, 2), (2, 1), (1, 1)]).unwrap();
        assert_eq!(composer.lines().len(), 3);
        assert_eq!(composer.total(), Decimal::new(4150, 2));
    }

    #[test]
    fn compose_rejects_unknown_and_unavailable_dishes() {
        let menu = vec![dish(1, 1250, true), dish(2, 400, false)];
        assert!(compose(&menu, &[(9, 1)]).is_err());
        assert!(compose(&menu, &[(2, 1)]).is_err());
        assert!(compose(&menu, &[(1, 0)]).is_err());
    }

    #[tokio::test]
    async fn status_change_refreshes_the_order_list() {
        let api = ApiClient::new(Backend::default());
        let cmd = OrdersCommand::Status {
            id: 17,
            status: OrderStatus::Delivered,
        };

        run(&api, cmd).await.unwrap();

        let calls = api.http().calls.lock().unwrap().clone();
        assert_eq!(calls, ["PUT /api/pedidos/17/estado", "GET /api/pedidos"]);
    }
}
