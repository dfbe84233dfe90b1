use chrono::NaiveDate;
use scraper::{ElementRef, Html};

use super::dish::Dish;
use super::error::{Error, Result};
use crate::static_selector;

/// All dish entries of one calendar day, in menu order.
#[derive(Debug)]
pub struct DayMenu {
    pub date: NaiveDate,
    pub dishes: Vec<Dish>,
}

/// Dish names arrive hyphenated with soft hyphen entities. Strip them from
/// the raw markup before the parser decodes them into invisible U+00AD
/// characters inside the text nodes.
pub fn strip_soft_hyphens(markup: &str) -> String {
    markup.replace("&shy;", "").replace('\u{00AD}', "")
}

/// Finds the day block whose `data-date2` attribute equals `date`. Blocks
/// for other days are left unparsed; a missing block is not an error, the
/// listing is just empty.
pub fn menu_for_date(markup: &str, date: NaiveDate) -> Result<Option<DayMenu>> {
    static_selector!(DAY_SELECTOR <- "div.essenliste.page");
    let markup = strip_soft_hyphens(markup);
    let document = Html::parse_document(&markup);
    let target = date.to_string();
    for day in document.select(&DAY_SELECTOR) {
        if day.attr("data-date2") == Some(target.as_str()) {
            return DayMenu::from_html_element(day).map(Some);
        }
    }
    Ok(None)
}

impl DayMenu {
    pub fn from_html_element(element: ElementRef<'_>) -> Result<Self> {
        static_selector!(DISH_SELECTOR <- "li.conditional");
        let date_str = element
            .attr("data-date2")
            .ok_or_else(|| Error::html_parse_error("day block has no data-date2 attribute"))?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| Error::html_parse_error("day block date is not in ISO form"))?;
        let dishes = element
            .select(&DISH_SELECTOR)
            .map(Dish::from_html_element)
            .collect::<Result<_>>()?;
        Ok(Self { date, dishes })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_markup() -> String {
        std::fs::read_to_string("./src/parse/html_examples/day.html").unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn finds_the_block_for_the_requested_date() {
        let menu = menu_for_date(&example_markup(), date(2024, 5, 13))
            .expect("the example markup should parse")
            .expect("the example markup should have a block for the 13th");

        assert_eq!(menu.date, date(2024, 5, 13));
        assert_eq!(menu.dishes.len(), 3);
        assert_eq!(menu.dishes[0].category, "tellergericht-i");
        assert_eq!(menu.dishes[0].price, Some(4.5));
        assert_eq!(menu.dishes[1].category, "wok-gericht");
        assert_eq!(menu.dishes[1].price, None);
        assert_eq!(menu.dishes[2].category, "aktionsgericht");
    }

    #[test]
    fn soft_hyphens_never_reach_dish_names() {
        let menu = menu_for_date(&example_markup(), date(2024, 5, 13))
            .unwrap()
            .unwrap();
        assert_eq!(
            menu.dishes[0].name,
            "Panierte Putenschnitzel mit Pommes frites und Salatgarnitur"
        );
        for dish in &menu.dishes {
            assert!(!dish.name.contains('\u{00AD}'), "name {:?}", dish.name);
        }
    }

    #[test]
    fn other_day_blocks_stay_untouched() {
        let menu = menu_for_date(&example_markup(), date(2024, 5, 14))
            .unwrap()
            .unwrap();
        assert_eq!(menu.dishes.len(), 1);
        assert_eq!(menu.dishes[0].name, "Currywurst mit Baguette");
        assert_eq!(menu.dishes[0].category, "grill");
    }

    #[test]
    fn a_date_without_a_block_yields_nothing() {
        assert!(menu_for_date(&example_markup(), date(2024, 5, 16))
            .unwrap()
            .is_none());
    }

    #[test]
    fn strips_both_soft_hyphen_forms() {
        assert_eq!(
            strip_soft_hyphens("Gem\u{00AD}üse&shy;büffet"),
            "Gemüsebüffet"
        );
    }
}
