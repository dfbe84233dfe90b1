#![deny(unused_crate_dependencies)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

mod cli;
mod date;
mod display;
mod error;
mod fetch;
mod parse;

use chrono::Local;
use clap::Parser;

pub use error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let args = cli::Args::parse();

    let today = Local::now().date_naive();
    let Some(date) = date::resolve(args.query.as_deref(), today) else {
        println!(
            "Unknown query: {}",
            args.query.as_deref().unwrap_or_default()
        );
        std::process::exit(1);
    };
    log::debug!("resolved date query {:?} to {date}", args.query);

    display::print_banner(date);

    let client = fetch::make_client();
    let markup = fetch::fetch_markup(&client, fetch::MENU_URL).await?;

    if let Some(menu) = parse::menu_for_date(&markup, date)? {
        display::print_menu(&menu);
    } else {
        log::debug!("no day block for {date} in the fetched markup");
    }
    Ok(())
}
