//! The `checkout` command: sign in, fill the form, and place an order
//! against the simulated ports.

use crate::commands::cart::demo_session;
use anyhow::Result;
use clap::Args;
use console::style;
use vitrine_commerce::prelude::*;
use vitrine_session::NoticeLevel;

/// Arguments for `vitrine checkout`.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Recipient name
    #[arg(long, default_value = "Jane Doe")]
    name: String,

    /// Recipient email
    #[arg(long, default_value = "jane@example.com")]
    email: String,

    /// Payment method: COD, Easypaisa, JazzCash, BankTransfer, Card
    #[arg(long, default_value = "COD")]
    payment: String,

    /// Fetch the address from the simulated geocoder first
    #[arg(long)]
    locate: bool,

    /// Print structured logs for each mutation
    #[arg(long)]
    verbose: bool,
}

pub fn run(args: CheckoutArgs) -> Result<()> {
    let mut session = demo_session(args.verbose);

    session.sign_in(&args.email, "secret1").ok();
    session.add_to_cart(&ProductId::new("p1"), Size::new("M"));
    session.add_to_cart(&ProductId::new("p2"), Size::new("L"));

    let mut form = CheckoutForm {
        name: args.name,
        phone: "+92 300 1234567".to_string(),
        email: args.email,
        address: "12 Mall Road".to_string(),
        country: session.countries().into_iter().next(),
        state: "Punjab".to_string(),
        city: "Lahore".to_string(),
        zip: "54000".to_string(),
        ..CheckoutForm::default()
    };

    if args.locate {
        let coords = Coordinates::new(31.5204, 74.3587);
        if let Ok(address) = session.resolve_address(coords) {
            form.address = address;
            form.location = Some(coords);
        }
    }

    let payment = PaymentMethod::from_str(&args.payment);
    match session.place_order(&form, payment) {
        Ok(outcome) => {
            println!("{}", style("Order placed").bold().underlined());
            println!("  order     {}", outcome.order.id);
            println!("  items     {}", outcome.order.invoice().order_items);
            println!("  ship to   {}", outcome.order.shipping_address);
            println!("  payment   {}", outcome.order.payment.display_name());
            println!(
                "  total     {} (incl. {} shipping)",
                style(outcome.order.grand_total.display()).bold(),
                outcome.order.shipping_fee.display(),
            );
            println!("  invoice   {}", if outcome.invoice_sent { "sent" } else { "not sent" });
        }
        Err(err) => {
            println!("{} {}", style("rejected:").red().bold(), err.user_message());
        }
    }

    for notice in session.take_notices() {
        let tag = match notice.level {
            NoticeLevel::Info => style("info").dim(),
            NoticeLevel::Success => style("ok").green(),
            NoticeLevel::Error => style("err").red(),
        };
        println!("  [{}] {}", tag, notice.message);
    }

    Ok(())
}
