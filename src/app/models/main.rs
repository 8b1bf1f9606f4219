use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub cover_image: String,
    pub price: f64,
    pub discount_rate: f64,
    // Only the single book endpoint sends it
    pub description: Option<String>,
}

impl Book {
    pub fn formatted_discount(&self) -> String {
        format!("{}%", self.discount_rate)
    }

    pub fn formatted_price(&self) -> String {
        format!("{} 원", group_thousands(self.price))
    }
}

fn group_thousands(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let units = rounded.trunc() as u64;
    let digits = units.to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;
    match cents {
        0 => grouped,
        c if c % 10 == 0 => format!("{}.{}", grouped, c / 10),
        c => format!("{}.{:02}", grouped, c),
    }
}
