mod books;
mod books_model;
mod scroll_threshold;

pub use books::*;
pub use books_model::*;
pub use scroll_threshold::*;
