use shared::intent::MenuFilter;
use shared::models::{MenuItem, MenuItemCreate};
use shared::{ListFilter, ListResource};

use super::ApiClient;
use crate::{ClientResult, HttpClient, write_outcome};

impl<C: HttpClient> ApiClient<C> {
    pub async fn list_menu_items(&self, filter: &MenuFilter) -> ClientResult<Vec<MenuItem>> {
        self.list(ListResource::Menu, &ListFilter::from(filter)).await
    }

    /// Whole menu, as used by the order and review pickers
    pub async fn all_menu_items(&self) -> ClientResult<Vec<MenuItem>> {
        self.list(ListResource::Menu, &ListFilter::new()).await
    }

    pub async fn create_menu_item(&self, item: &MenuItemCreate) -> ClientResult<()> {
        let result = self.http.post(ListResource::Menu.path(), item).await;
        crate::audit_log!(
            "create",
            "plato",
            write_outcome(&result),
            format!("{} {}", item.name, item.price)
        );
        result
    }
}
