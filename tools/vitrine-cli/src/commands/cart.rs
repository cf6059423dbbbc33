//! The `cart` command: a scripted walk through the cart operations.

use crate::seed;
use anyhow::Result;
use clap::Args;
use console::style;
use vitrine_auth::{MemorySessionStore, SimulatedExchange, SimulatedIdentityProvider};
use vitrine_commerce::prelude::*;
use vitrine_session::{
    FixedGeocoder, RecordingDispatcher, SessionLogger, SessionPorts, StaticCountries, StoreConfig,
    StorefrontSession,
};

/// Arguments for `vitrine cart`.
#[derive(Args)]
pub struct CartArgs {
    /// Print structured logs for each mutation
    #[arg(long)]
    verbose: bool,
}

/// Simulated ports for the demo session.
pub fn demo_ports() -> SessionPorts {
    SessionPorts {
        identity: Box::new(SimulatedIdentityProvider::new()),
        exchange: Box::new(SimulatedExchange::new()),
        session_store: Box::new(MemorySessionStore::new("vitrine.user")),
        geocoder: Box::new(FixedGeocoder::new("12 Mall Road, Lahore, Pakistan")),
        countries: Box::new(StaticCountries::default()),
        dispatcher: Box::new(RecordingDispatcher::new()),
    }
}

/// Build a demo session, logging only when asked.
pub fn demo_session(verbose: bool) -> StorefrontSession {
    let session = StorefrontSession::new(seed::catalog(), StoreConfig::default(), demo_ports());
    if verbose {
        session.with_logger(SessionLogger::new("demo").with_format(vitrine_session::LogFormat::Human))
    } else {
        session.with_logger(SessionLogger::disabled())
    }
}

pub fn run(args: CartArgs) -> Result<()> {
    let mut session = demo_session(args.verbose);
    let currency = session.config().currency;

    println!("{}", style("Cart walk-through").bold().underlined());

    session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
    session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
    session.add_to_cart(&ProductId::new("p4"), Size::new("L"));
    println!("added Classic Shirt (M) twice and Seamless Sweater (L) once");
    print_cart(&session, currency);

    session.decrease_quantity(&ProductId::new("p1"), &Size::new("M"));
    session.decrease_quantity(&ProductId::new("p1"), &Size::new("M"));
    println!("\ndecreased Classic Shirt (M) twice; quantity floors at 1");
    print_cart(&session, currency);

    session.remove_from_cart(&ProductId::new("p4"), &Size::new("L"));
    println!("\nremoved Seamless Sweater (L)");
    print_cart(&session, currency);

    Ok(())
}

fn print_cart(session: &StorefrontSession, currency: Currency) {
    let cart = session.cart();
    for line in cart.lines() {
        println!(
            "  {:<18} size {:<3} x{}  {}",
            line.details.name,
            line.size.as_str(),
            line.quantity,
            line.subtotal(currency).display(),
        );
    }
    println!(
        "  {} item(s), subtotal {}",
        cart.item_count(),
        style(cart.subtotal(currency).display()).bold(),
    );
}
