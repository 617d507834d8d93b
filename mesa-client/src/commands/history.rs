use chrono::NaiveDate;
use clap::Args;
use mesa_client::models::HistoryRecord;
use mesa_client::{ApiClient, HttpClient, ListFilter, ListResource, ListView};
use shared::intent::HistoryFilter;
use shared::util::{format_date, format_money};

use super::{parse_date, show_page};

#[derive(Args)]
pub struct HistoryArgs {
    /// Customer whose orders are listed
    #[arg(long)]
    customer: String,

    /// Orders containing this dish
    #[arg(long)]
    dish: Option<String>,

    /// From this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    from: Option<NaiveDate>,

    /// Up to this day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    to: Option<NaiveDate>,
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, args: HistoryArgs) -> anyhow::Result<()> {
    let mut view: ListView<HistoryRecord> = ListView::new(ListResource::DetailedHistory);
    let filter = HistoryFilter {
        customer_id: Some(args.customer),
        dish_name: args.dish,
        from: args.from,
        to: args.to,
    };
    view.commit_filter(api, ListFilter::from(&filter)).await;

    show_page(
        &view,
        "Indica el id del cliente para ver su historial.",
        "No hay pedidos en el historial.",
        print_record,
    )
}

fn print_record(record: &HistoryRecord) {
    println!(
        "Pedido #{:<5} {:<10} {:>9}",
        record.order_id,
        format_date(&record.date),
        format_money(record.total)
    );
    for dish in &record.dishes {
        println!("    {} x{}", dish.name, dish.quantity);
    }
    if let Some(opinion) = &record.opinion {
        println!("    Opinión: {}/5 {}", opinion.rating, opinion.comment);
    }
}
