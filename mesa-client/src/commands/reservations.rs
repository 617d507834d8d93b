use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use mesa_client::models::{Reservation, ReservationCreate};
use mesa_client::{ApiClient, HttpClient, ListFilter, ListResource, ListView, ReservationGate};
use shared::intent::ReservationFilter;
use shared::util::format_date;

use super::{parse_date, parse_time, show_page};

#[derive(Subcommand)]
pub enum ReservationsCommand {
    /// List reservations, five per page
    List {
        /// Only this day (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Only this customer
        #[arg(long)]
        customer: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },

    /// Book a table after checking it is free
    Create {
        #[arg(long)]
        customer: i64,

        #[arg(long)]
        table: i64,

        /// YYYY-MM-DD
        #[arg(long, value_parser = parse_date)]
        date: NaiveDate,

        /// HH:MM
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,

        /// Party size
        #[arg(long)]
        people: u32,
    },
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, cmd: ReservationsCommand) -> anyhow::Result<()> {
    let mut view: ListView<Reservation> = ListView::new(ListResource::Reservations);

    match cmd {
        ReservationsCommand::List {
            date,
            customer,
            page,
        } => {
            let filter = ReservationFilter {
                date,
                customer_id: customer,
            };
            view.commit_filter(api, ListFilter::from(&filter)).await;
            view.go_to_page(page);
        }
        ReservationsCommand::Create {
            customer,
            table,
            date,
            time,
            people,
        } => {
            let input = ReservationCreate::new(customer, table, date, time, people)?;
            if !ReservationGate::new(api).submit_reservation(&mut view, &input).await {
                // The view carries the message
                return show_page(&view, "", "", print_reservation);
            }
            println!("Reserva creada: mesa {table}, {} {}", format_date(&input.date_param()), input.time_param());
        }
    }

    show_page(&view, "", "No hay reservas.", print_reservation)
}

fn print_reservation(r: &Reservation) {
    println!(
        "#{:<5} cliente {:<5} mesa {:<3} {} {}  {} personas  [{}]",
        r.id,
        r.customer_id,
        r.table_id,
        format_date(&r.date),
        r.time,
        r.party_size,
        r.status
    );
}
