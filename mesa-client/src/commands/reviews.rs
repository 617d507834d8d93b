use clap::Subcommand;
use mesa_client::models::{Review, ReviewCreate, VisitType, orderable_items};
use mesa_client::view::{DISHES_UNAVAILABLE_MESSAGE, Form};
use mesa_client::{ApiClient, HttpClient, ListFilter, ListResource, ListView};
use shared::intent::ReviewFilter;

use super::{fail, show_page};

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// List reviews
    List {
        /// presencial / domicilio
        #[arg(long)]
        visit_type: Option<VisitType>,

        /// Exact star rating
        #[arg(long)]
        stars: Option<u8>,

        /// Reviews mentioning this dish
        #[arg(long)]
        dish: Option<String>,
    },

    /// Record a customer review
    Create {
        #[arg(long)]
        customer: i64,

        /// 1 to 5
        #[arg(long)]
        rating: u8,

        #[arg(long, default_value = "")]
        comment: String,

        /// presencial / domicilio
        #[arg(long, default_value = "presencial")]
        visit_type: VisitType,

        /// Dish id; repeat for more dishes
        #[arg(long = "dish")]
        dishes: Vec<i64>,
    },
}

pub async fn run<C: HttpClient>(api: &ApiClient<C>, cmd: ReviewsCommand) -> anyhow::Result<()> {
    let mut view: ListView<Review> = ListView::new(ListResource::Reviews);

    match cmd {
        ReviewsCommand::List {
            visit_type,
            stars,
            dish,
        } => {
            let filter = ReviewFilter {
                visit_type,
                stars,
                dish_name: dish,
            };
            view.commit_filter(api, ListFilter::from(&filter)).await;
        }
        ReviewsCommand::Create {
            customer,
            rating,
            comment,
            visit_type,
            dishes,
        } => {
            if !dishes.is_empty() {
                let menu = api
                    .all_menu_items()
                    .await
                    .map_err(|e| fail(e, DISHES_UNAVAILABLE_MESSAGE))?;
                if let Some(unknown) = dishes
                    .iter()
                    .find(|id| !orderable_items(&menu).any(|item| item.id == **id))
                {
                    anyhow::bail!("El plato #{unknown} no está disponible.");
                }
            }

            let review = ReviewCreate::new(customer, rating, comment, visit_type, dishes)?;
            api.create_review(&review)
                .await
                .map_err(|e| fail(e, Form::Review.failed_message()))?;
            println!("Opinión agregada.");
            view.mount(api).await;
        }
    }

    show_page(&view, "", "No hay opiniones.", print_review)
}

fn print_review(review: &Review) {
    let stars = "★".repeat(review.rating.min(ReviewCreate::MAX_RATING).into());
    println!(
        "cliente {:<5} {:<5} {}",
        review.customer_id, stars, review.visit_type
    );
    if !review.comment.is_empty() {
        println!("    \"{}\"", review.comment);
    }
    if !review.consumed.is_empty() {
        let names: Vec<&str> = review.consumed.iter().map(|d| d.name.as_str()).collect();
        println!("    {}", names.join(", "));
    }
}
