use chrono::NaiveDate;
use colored::Colorize;

use crate::parse::{DayMenu, Dish};

/// Canonical category order and display labels. Codes the backend emits
/// beyond this table are appended after it, raw code as label.
static CATEGORIES: &[(&str, &str)] = &[
    ("tellergericht-i", "Tellergericht 1"),
    ("tellergericht-i-3-60", "Tellergericht 1"),
    ("tellergericht-ii", "Tellergericht 2"),
    ("tellergericht-ii-3-90", "Tellergericht 2"),
    ("tellergericht-iii", "Tellergericht 3"),
    ("wok-gericht", "Asia"),
    ("grill", "Grill"),
    ("nudelbuffet", "Nudelbuffet"),
    ("beilage", "Beilage"),
    ("s-ssspeise", "Süßspeise"),
    ("pizza", "Pizza"),
    ("pizza-vegan", "Vegane Pizza"),
    ("nudelb-ffet", "Nudelbüffet"),
    ("gem-seb-ffet", "Gemüsebüffet"),
    ("hinweis", "Hinweis"),
];

pub fn print_banner(date: NaiveDate) {
    println!("Dishes for: {date}");
}

/// Prints the day's dishes grouped under colorized category headers, prices
/// aligned to one column. Unknown prices render as a run of question marks.
pub fn print_menu(menu: &DayMenu) {
    let grouped = group_by_category(&menu.dishes);
    let width = price_width(&menu.dishes);
    for (code, label) in display_order(&grouped) {
        let Some((_, dishes)) = grouped.iter().find(|(c, _)| *c == code) else {
            continue;
        };
        println!("{}", label.cyan().bold());
        for dish in dishes {
            match dish.price {
                Some(price) => println!(
                    "{} {}",
                    format!("{:0<width$}", format_price(price)).green(),
                    dish.name
                ),
                None => println!("{} {}", "?".repeat(width).red(), dish.name),
            }
        }
    }
}

/// Groups dishes by category class, keeping the first-encountered order of
/// categories and the menu order within each category.
fn group_by_category(dishes: &[Dish]) -> Vec<(&str, Vec<&Dish>)> {
    let mut grouped: Vec<(&str, Vec<&Dish>)> = Vec::new();
    for dish in dishes {
        match grouped.iter_mut().find(|(code, _)| *code == dish.category) {
            Some((_, entries)) => entries.push(dish),
            None => grouped.push((dish.category.as_str(), vec![dish])),
        }
    }
    grouped
}

/// Canonical categories first, then whatever the data contained beyond them.
fn display_order<'a>(grouped: &[(&'a str, Vec<&'a Dish>)]) -> Vec<(&'a str, &'a str)> {
    let mut order: Vec<(&str, &str)> = CATEGORIES.to_vec();
    for (code, _) in grouped {
        if !CATEGORIES.iter().any(|(known, _)| known == code) {
            order.push((*code, *code));
        }
    }
    order
}

/// Width of the price column: the longest known price, zero if none is known.
fn price_width(dishes: &[Dish]) -> usize {
    dishes
        .iter()
        .filter_map(|dish| dish.price)
        .map(|price| format_price(price).len())
        .max()
        .unwrap_or(0)
}

fn format_price(price: f64) -> String {
    format!("{price:.2}")
}
