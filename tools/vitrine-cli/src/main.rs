//! Vitrine CLI - terminal demo for the storefront core.
//!
//! Commands:
//! - `vitrine browse` - Filter, sort, and search the seeded catalog
//! - `vitrine cart` - Walk through the cart operations
//! - `vitrine checkout` - Place an order end to end with simulated ports

mod commands;
mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BrowseArgs, CartArgs, CheckoutArgs};

/// Vitrine CLI - drive the storefront core from the terminal
#[derive(Parser)]
#[command(name = "vitrine")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort, and search the seeded catalog
    Browse(BrowseArgs),

    /// Walk through the cart operations
    Cart(CartArgs),

    /// Place an order end to end with simulated ports
    Checkout(CheckoutArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Browse(args) => commands::browse::run(args),
        Commands::Cart(args) => commands::cart::run(args),
        Commands::Checkout(args) => commands::checkout::run(args),
    }
}
