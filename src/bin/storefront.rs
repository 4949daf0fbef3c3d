use std::process::ExitCode;

use clap::{Parser, Subcommand};
use emi_store::{
    client::{ApiClient, DEFAULT_API_URL},
    telemetry,
    views::{DetailState, DetailView, ListState, ListView},
};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the smartphone catalog and its EMI plans")]
struct Cli {
    /// Base URL of the catalog API.
    #[arg(long, env = "STOREFRONT_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List every product with its EMI summary.
    List,
    /// Show one product, optionally picking a color and an EMI plan.
    Show {
        slug: String,
        /// Color number as listed on the page (starting at 1).
        #[arg(long)]
        color: Option<usize>,
        /// EMI plan number as listed on the page (starting at 1).
        #[arg(long)]
        plan: Option<usize>,
        /// Confirm the selected plan.
        #[arg(long, requires = "plan")]
        proceed: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    telemetry::init_tracing();

    let cli = Cli::parse();

    let client = match ApiClient::new(&cli.api_url) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Commands::List => {
            let mut view = ListView::new();
            view.load(&client).await;
            print!("{}", view);

            if matches!(view.state(), ListState::Error(_)) {
                return ExitCode::FAILURE;
            }
        }
        Commands::Show {
            slug,
            color,
            plan,
            proceed,
        } => {
            let mut view = DetailView::new(slug);
            view.load(&client).await;

            if matches!(view.state(), DetailState::Error(_)) {
                print!("{}", view);
                return ExitCode::FAILURE;
            }

            if let Some(number) = color {
                if !select(number, |index| view.select_color(index)) {
                    eprintln!("No color number {}", number);
                    return ExitCode::FAILURE;
                }
            }

            if let Some(number) = plan {
                if !select(number, |index| view.select_plan(index)) {
                    eprintln!("No EMI plan number {}", number);
                    return ExitCode::FAILURE;
                }
            }

            print!("{}", view);

            if proceed {
                if let Some(confirmation) = view.proceed() {
                    println!();
                    println!("{}", confirmation);
                }
            }
        }
    }

    ExitCode::SUCCESS
}

/// Maps a 1-based number from the rendered page to a list index.
fn select(number: usize, pick: impl FnOnce(usize) -> bool) -> bool {
    number.checked_sub(1).is_some_and(pick)
}
