use clap::Subcommand;
use mesa_client::models::{MenuItem, MenuItemCreate};
use mesa_client::view::Form;
use mesa_client::{ApiClient, HttpClient, ListFilter, ListResource, ListView};
use rust_decimal::Decimal;
use shared::intent::MenuFilter;
use shared::util::format_money;

use super::{fail, show_page};

#[derive(Subcommand)]
pub enum MenuCommand {
    /// List dishes, five per page
    List {
        /// Name contains
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// true / false
        #[arg(long)]
        available: Option<bool>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Add a dish to the menu
    Create {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "")]
        description: String,

        #[arg(long)]
        price: Decimal,

        #[arg(long)]
        category: String,

        /// Add it as not available
        #[arg(long)]
        unavailable: bool,
    },
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, cmd: MenuCommand) -> anyhow::Result<()> {
    let mut view: ListView<MenuItem> = ListView::new(ListResource::Menu);

    match cmd {
        MenuCommand::List {
            name,
            category,
            available,
            page,
        } => {
            let filter = MenuFilter {
                name,
                category,
                available,
            };
            view.commit_filter(api, ListFilter::from(&filter)).await;
            view.go_to_page(page);
        }
        MenuCommand::Create {
            name,
            description,
            price,
            category,
            unavailable,
        } => {
            let item = MenuItemCreate::new(name, description, price, category, !unavailable)?;
            api.create_menu_item(&item)
                .await
                .map_err(|e| fail(e, Form::Dish.failed_message()))?;
            println!("Plato agregado: {}", item.name);
            view.mount(api).await;
        }
    }

    show_page(&view, "", "No hay platos.", print_item)
}

fn print_item(item: &MenuItem) {
    let availability = if item.available { "disponible" } else { "no disponible" };
    println!(
        "#{:<4} {:<30} {:>8}  {:<15} {}",
        item.id,
        item.name,
        format_money(item.price),
        item.category,
        availability
    );
    if !item.description.is_empty() {
        println!("      {}", item.description);
    }
}
