mod api_models;
mod bookshelf_client;
mod client;

pub use bookshelf_client::{BookApiClient, BookshelfClient};

#[cfg(test)]
pub use bookshelf_client::tests::{network_failure, TestBookApiClient};
