use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    HtmlParse(String),
    TextNode(String),
    Category(String),
}

impl Error {
    pub fn html_parse_error(msg: &str) -> Self {
        Self::HtmlParse(msg.to_string())
    }

    pub fn text_node_error(msg: &str) -> Self {
        Self::TextNode(msg.to_string())
    }

    pub fn category_error(msg: &str) -> Self {
        Self::Category(msg.to_string())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "HTML Parse Error: {msg}"),
            Self::TextNode(msg) => write!(f, "Text Node Error: {msg}"),
            Self::Category(msg) => write!(f, "Category Error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
