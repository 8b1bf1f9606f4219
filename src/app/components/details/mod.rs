mod details;
mod details_model;

pub use details::*;
pub use details_model::*;
