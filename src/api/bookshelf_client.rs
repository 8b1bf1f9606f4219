use futures::future::BoxFuture;

use super::client::{BookApiError, BookClient};
use crate::app::models::*;

pub type BookResult<T> = Result<T, BookApiError>;

pub trait BookApiClient {
    fn fetch_collection(&self) -> BoxFuture<BookResult<Vec<Book>>>;

    fn fetch_by_id(&self, id: &BookId) -> BoxFuture<BookResult<Book>>;
}

// One request per call: no retry, no cache.
pub struct BookshelfClient {
    client: BookClient,
}

impl BookshelfClient {
    pub fn new(base_url: &str) -> BookResult<Self> {
        Ok(Self {
            client: BookClient::new(base_url)?,
        })
    }
}

impl BookApiClient for BookshelfClient {
    fn fetch_collection(&self) -> BoxFuture<BookResult<Vec<Book>>> {
        Box::pin(async move {
            let books = self.client.get_books()?.send().await?;
            debug!("fetched {} books", books.len());
            Ok(books.into_iter().map(Book::from).collect())
        })
    }

    fn fetch_by_id(&self, id: &BookId) -> BoxFuture<BookResult<Book>> {
        let id = id.clone();

        Box::pin(async move {
            let book = self.client.get_book(id.as_str())?.send().await?;
            Ok(book.into())
        })
    }
}

#[cfg(test)]
pub mod tests {

    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::{sleep, Instant};

    type Scripted<T> = Mutex<VecDeque<(u64, BookResult<T>)>>;

    pub fn network_failure() -> BookApiError {
        BookApiError::IoError(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ))
    }

    // Answers with scripted results after a scripted latency, in call order.
    // An empty script answers immediately with an empty collection.
    #[derive(Default)]
    pub struct TestBookApiClient {
        collections: Scripted<Vec<Book>>,
        details: Scripted<Book>,
        collection_calls: Mutex<Vec<Instant>>,
        detail_calls: Mutex<Vec<BookId>>,
    }

    impl TestBookApiClient {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_collection(self, latency_ms: u64, result: BookResult<Vec<Book>>) -> Self {
            self.collections
                .lock()
                .unwrap()
                .push_back((latency_ms, result));
            self
        }

        pub fn with_details(self, latency_ms: u64, result: BookResult<Book>) -> Self {
            self.details.lock().unwrap().push_back((latency_ms, result));
            self
        }

        pub fn collection_calls(&self) -> Vec<Instant> {
            self.collection_calls.lock().unwrap().clone()
        }

        pub fn detail_calls(&self) -> Vec<BookId> {
            self.detail_calls.lock().unwrap().clone()
        }
    }

    impl BookApiClient for TestBookApiClient {
        fn fetch_collection(&self) -> BoxFuture<BookResult<Vec<Book>>> {
            self.collection_calls.lock().unwrap().push(Instant::now());
            let (latency_ms, result) = self
                .collections
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or((0, Ok(vec![])));
            Box::pin(async move {
                sleep(Duration::from_millis(latency_ms)).await;
                result
            })
        }

        fn fetch_by_id(&self, id: &BookId) -> BoxFuture<BookResult<Book>> {
            self.detail_calls.lock().unwrap().push(id.clone());
            let (latency_ms, result) = self
                .details
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| (0, Err(network_failure())));
            Box::pin(async move {
                sleep(Duration::from_millis(latency_ms)).await;
                result
            })
        }
    }
}
