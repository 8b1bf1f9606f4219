use isahc::http::{method::Method, request::Builder, uri::InvalidUri, Uri};
use isahc::{AsyncReadResponseExt, HttpClient};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde_json::from_str;
use std::marker::PhantomData;
use thiserror::Error;

pub use super::api_models::*;

// https://url.spec.whatwg.org/#path-percent-encode-set, plus the segment delimiters
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

#[derive(Error, Debug)]
pub enum BookApiError {
    #[error("Request failed ({0}): {1}")]
    BadStatus(u16, String),
    #[error("Invalid request uri: {0}")]
    InvalidUri(#[from] InvalidUri),
    #[error(transparent)]
    HttpError(#[from] isahc::http::Error),
    #[error(transparent)]
    ClientError(#[from] isahc::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error(transparent)]
    ParseError(#[from] serde_json::Error),
}

pub(crate) struct BookRequest<'a, Response> {
    client: &'a BookClient,
    request: Builder,
    _type: PhantomData<Response>,
}

impl<'a, R> BookRequest<'a, R>
where
    R: DeserializeOwned,
{
    fn method(mut self, method: Method) -> Self {
        self.request = self.request.method(method);
        self
    }

    fn uri(mut self, path: String) -> Result<Self, BookApiError> {
        let uri = format!("{}{}", self.client.base_url, path).parse::<Uri>()?;
        self.request = self.request.uri(uri);
        Ok(self)
    }

    pub(crate) async fn send(self) -> Result<R, BookApiError> {
        let Self {
            client, request, ..
        } = self;
        let request = request.header("Accept", "application/json").body(())?;
        let mut response = client.client.send_async(request).await?;

        let status = response.status();
        if status.is_success() {
            let content = response.text().await?;
            Ok(from_str(&content)?)
        } else {
            Err(BookApiError::BadStatus(
                status.as_u16(),
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "(no details available)".to_string()),
            ))
        }
    }
}

pub(crate) struct BookClient {
    base_url: String,
    client: HttpClient,
}

impl BookClient {
    pub(crate) fn new(base_url: &str) -> Result<Self, BookApiError> {
        // validated once here so that request uris only fail on odd ids
        let base_url = base_url.trim_end_matches('/').to_string();
        base_url.parse::<Uri>()?;
        Ok(Self {
            base_url,
            client: HttpClient::new()?,
        })
    }

    fn request<T>(&self) -> BookRequest<'_, T> {
        BookRequest {
            client: self,
            request: Builder::new(),
            _type: PhantomData,
        }
    }

    pub(crate) fn get_books(&self) -> Result<BookRequest<'_, Vec<RawBook>>, BookApiError> {
        self.request()
            .method(Method::GET)
            .uri("/books".to_string())
    }

    pub(crate) fn get_book(&self, id: &str) -> Result<BookRequest<'_, RawBook>, BookApiError> {
        let id = utf8_percent_encode(id, SEGMENT_ENCODE_SET);
        self.request()
            .method(Method::GET)
            .uri(format!("/books/{}", id))
    }
}
