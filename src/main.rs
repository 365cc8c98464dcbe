#![allow(non_snake_case)]

mod app;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use stock_fetcher::registry;

/// Options pushed into the embedded components, set from the command line.
#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    pub dealer_id: String,
    pub primary_col: Option<String>,
    pub caption: Option<String>,
}

static OPTIONS: OnceLock<DemoOptions> = OnceLock::new();

/// Get the demo options (set from command line args).
pub fn get_options() -> DemoOptions {
    OPTIONS.get().cloned().unwrap_or_default()
}

/// Stockgrid - dealer stock browser
#[derive(Parser, Debug)]
#[command(name = "stockgrid-desktop")]
#[command(about = "Stockgrid - demo shell embedding the stock-fetcher components")]
struct Args {
    /// Dealer identifier for the published stock feed
    #[arg(short, long, default_value = "")]
    dealer_id: String,

    /// Accent colour (any CSS colour) for card headings
    #[arg(short, long)]
    primary_col: Option<String>,

    /// Caption for the about card
    #[arg(short, long)]
    caption: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let _ = OPTIONS.set(DemoOptions {
        dealer_id: args.dealer_id.clone(),
        primary_col: args.primary_col,
        caption: args.caption,
    });

    // One-time component registration at application start
    if let Err(e) = stock_fetcher::register_builtins(registry::global()) {
        tracing::error!("Component registration failed: {}", e);
    }

    let title = if args.dealer_id.is_empty() {
        "Stockgrid".to_string()
    } else {
        format!("Stockgrid - dealer {}", args.dealer_id)
    };

    tracing::info!("Starting '{}'", title);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 800.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
