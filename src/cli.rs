use clap::Parser;

/// auxmensa is a small command-line tool that prints the daily menu of the
/// mensa at the University of Augsburg.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Day to show: "morgen"/"tomorrow", "übermorgen", or a weekday name
    /// like "freitag", "wednesday" or "mo". Defaults to today.
    pub query: Option<String>,
}
