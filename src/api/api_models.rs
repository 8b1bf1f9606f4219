use serde::Deserialize;
use std::fmt;

use crate::app::models::*;

// The collection endpoint has been seen serving both numeric and textual ids
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for RawId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RawBook {
    pub id: RawId,
    pub title: String,
    pub cover_image: String,
    pub price: f64,
    pub discount_rate: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<RawBook> for Book {
    fn from(book: RawBook) -> Self {
        let RawBook {
            id,
            title,
            cover_image,
            price,
            discount_rate,
            description,
        } = book;
        Self {
            id: BookId::new(id.to_string()),
            title,
            cover_image,
            price,
            discount_rate,
            description,
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_numeric_and_textual_ids() {
        let raw = r#"[
            {"id": 1, "title": "A", "coverImage": "http://img/1.png", "price": 12000, "discountRate": 10},
            {"id": "b-2", "title": "B", "coverImage": "http://img/2.png", "price": 8500.5, "discountRate": 0}
        ]"#;
        let books = serde_json::from_str::<Vec<RawBook>>(raw)
            .unwrap()
            .into_iter()
            .map(Book::from)
            .collect::<Vec<Book>>();

        assert_eq!(books[0].id, BookId::new("1"));
        assert_eq!(books[0].cover_image, "http://img/1.png");
        assert_eq!(books[1].id, BookId::new("b-2"));
        assert_eq!(books[1].description, None);
    }

    #[test]
    fn test_signed_and_fractional_ids() {
        let raw = r#"[
            {"id": -3, "title": "A", "coverImage": "", "price": 1, "discountRate": 0},
            {"id": 1.5, "title": "B", "coverImage": "", "price": 1, "discountRate": 0}
        ]"#;
        let ids = serde_json::from_str::<Vec<RawBook>>(raw)
            .unwrap()
            .into_iter()
            .map(|book| Book::from(book).id)
            .collect::<Vec<BookId>>();

        assert_eq!(ids, vec![BookId::new("-3"), BookId::new("1.5")]);
    }

    #[test]
    fn test_detail_payload_has_description() {
        let raw = r#"{"id": 42, "title": "T", "coverImage": "u", "price": 1, "discountRate": 5, "description": "about"}"#;
        let book: Book = serde_json::from_str::<RawBook>(raw).unwrap().into();

        assert_eq!(book.description.as_deref(), Some("about"));
    }

    #[test]
    fn test_missing_field_fails() {
        let raw = r#"{"id": 42, "title": "T"}"#;
        assert!(serde_json::from_str::<RawBook>(raw).is_err());
    }
}
