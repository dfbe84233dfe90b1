use std::sync::OnceLock;

use regex::Regex;
use scraper::ElementRef;

use super::error::Error;
use super::text::{direct_text, first_direct_text};
use crate::static_selector;

/// One menu entry: the flattened dish name, the student-tier price, and the
/// raw category class token from the markup.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub name: String,
    pub price: Option<f64>,
    pub category: String,
}

// class tokens present on every entry that carry no category information
static BOOKKEEPING_CLASSES: &[&str] = &["conditional", "checkempty"];

impl Dish {
    pub fn from_html_element(element: ElementRef<'_>) -> Result<Self, Error> {
        static_selector!(HEADING_SELECTOR <- "h3");
        static_selector!(DESCRIPTION_SELECTOR <- "p.ct.text2share");
        static_selector!(PRICE_SELECTOR <- "p.ct.next.text2share");

        let heading = element
            .select(&HEADING_SELECTOR)
            .next()
            .ok_or_else(|| Error::html_parse_error("every dish entry should have an h3 heading"))?;
        let mut name = first_direct_text(heading, "dish heading")?.trim().to_string();

        // the price paragraph matches p.ct.text2share too; the description
        // paragraph comes first in the markup
        let description = element.select(&DESCRIPTION_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("every dish entry should have a description paragraph")
        })?;
        let fragments: Vec<&str> = direct_text(description).map(str::trim).collect();
        name.push(' ');
        name.push_str(&fragments.join(" "));

        let price_paragraph = element.select(&PRICE_SELECTOR).next().ok_or_else(|| {
            Error::html_parse_error("every dish entry should have a price paragraph")
        })?;
        let price = parse_price(&price_paragraph.text().collect::<String>());

        let category = category_class(element)?;

        Ok(Self {
            name,
            price,
            category,
        })
    }
}

/// A dish entry carries exactly one class token beyond the bookkeeping ones.
/// Zero or several means the markup changed shape underneath us, and the
/// whole run aborts rather than guessing.
fn category_class(element: ElementRef<'_>) -> Result<String, Error> {
    let mut classes = element
        .value()
        .classes()
        .filter(|class| !BOOKKEEPING_CLASSES.contains(class) && !class.starts_with("dbg"));
    let category = classes
        .next()
        .ok_or_else(|| Error::category_error("dish entry carries no category class"))?;
    if let Some(extra) = classes.next() {
        return Err(Error::category_error(&format!(
            "dish entry carries more than one category class: {category:?}, {extra:?}"
        )));
    }
    Ok(category.to_string())
}

/// The price paragraph lists three tiers, students first, as
/// "<euros>,<cents>\u{a0}€". Only the student price is kept; any other
/// number of tokens leaves the price unknown instead of failing the entry.
fn parse_price(text: &str) -> Option<f64> {
    static PRICE_RE: OnceLock<Regex> = OnceLock::new();
    let re = PRICE_RE
        .get_or_init(|| Regex::new("(\\d+,\\d+)\u{00A0}€").expect("regex should be valid"));
    let prices: Vec<f64> = re
        .captures_iter(text)
        .filter_map(|capture| capture[1].replace(',', ".").parse().ok())
        .collect();
    match prices.as_slice() {
        [student, _, _] => Some(*student),
        _ => None,
    }
}
