use std::path::PathBuf;

use clap::Parser;
use polly_client::{
    PageRequest, Poll, list_polls,
    logging::{LoggingConfig, init_logging},
    register,
};
use tracing::Level;

/// Register a test user and fetch the first two pages of polls
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Base URL of the Polly API
    #[arg(long, default_value = "http://localhost:8000")]
    base_url: String,

    #[arg(long, default_value = "testuser")]
    username: String,

    #[arg(long, default_value = "testpassword")]
    password: String,

    /// Page size for both poll requests
    #[arg(long, default_value_t = 10)]
    limit: u32,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value_t = Level::WARN)]
    log_level: Level,

    /// Also write JSON logs to daily files in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let _log_guard = init_logging(
        LoggingConfig::default()
            .with_level(args.log_level)
            .with_log_dir(args.log_dir.clone()),
    )?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %args.base_url,
        "Polly client starting up"
    );

    println!("Registering user '{}'...", args.username);
    if let Some(response) = register(&args.base_url, &args.username, &args.password).await {
        println!("Status Code: {}", response.status.as_u16());
        match response.json::<serde_json::Value>() {
            Ok(json) => println!("Response JSON: {json}"),
            Err(_) => {
                println!("Response content is not in JSON format.");
                println!("Response Text: {}", response.body);
            },
        }
    }

    println!("\n{}\n", "=".repeat(20));

    let first_page = PageRequest::default().with_limit(args.limit);
    println!(
        "Fetching polls with default pagination (skip={}, limit={})...",
        first_page.skip, first_page.limit
    );
    match list_polls(&args.base_url, first_page).await {
        Some(polls) => print_polls(&polls),
        None => println!("Failed to fetch polls."),
    }

    let next_page = first_page.next_page();
    println!(
        "\nFetching next page of polls (skip={}, limit={})...",
        next_page.skip, next_page.limit
    );
    match list_polls(&args.base_url, next_page).await {
        Some(polls) => print_polls(&polls),
        None => println!("Failed to fetch the next page of polls."),
    }

    Ok(())
}

fn print_polls(polls: &[Poll]) {
    println!("Successfully fetched {} polls.", polls.len());
    for poll in polls {
        println!("  - Poll ID: {}, Question: {}", poll.id, poll.question);
    }
}
