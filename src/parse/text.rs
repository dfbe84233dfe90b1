use scraper::ElementRef;

use super::error::Error;

/// Text nodes that are direct children of `element`. Unlike
/// `ElementRef::text` this does not descend into child elements, which
/// matters here because dish headings and paragraphs carry markup (icons,
/// line breaks) between the fragments we want.
pub fn direct_text<'a>(element: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    element
        .children()
        .filter_map(|node| node.value().as_text().map(|text| &**text))
}

/// First direct text node of `element`, as a typed error when there is none.
pub fn first_direct_text<'a>(element: ElementRef<'a>, label: &str) -> Result<&'a str, Error> {
    direct_text(element)
        .next()
        .ok_or_else(|| Error::text_node_error(&format!("{label} should have text inside")))
}
