use shared::intent::OrderFilter;
use shared::models::{Order, OrderCreate, OrderStatus, OrderStatusUpdate};
use shared::{ListFilter, ListResource};

use super::ApiClient;
use crate::{ClientResult, HttpClient, write_outcome};

impl<C: HttpClient> ApiClient<C> {
    pub async fn list_orders(&self, filter: &OrderFilter) -> ClientResult<Vec<Order>> {
        self.list(ListResource::Orders, &ListFilter::from(filter)).await
    }

    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<()> {
        let result = self.http.post(ListResource::Orders.path(), order).await;
        crate::audit_log!(
            "create",
            "pedido",
            write_outcome(&result),
            format!(
                "cliente {}, {} lineas, total {}",
                order.customer_id,
                order.details.len(),
                order.total
            )
        );
        result
    }

    /// Move an order to `status`; legality of the transition is the backend's call
    pub async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let path = format!("{}/{}/estado", ListResource::Orders.path(), order_id);
        let result = self.http.put(&path, &OrderStatusUpdate { status }).await;
        crate::audit_log!(
            "update",
            format!("pedido:{order_id}"),
            write_outcome(&result),
            status.label()
        );
        result
    }
}
