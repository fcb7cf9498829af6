//! HTTP request builder for the Shippinglabel API.
//!
//! [`HttpRequest`] describes a single outbound call: method, URL, headers,
//! a lazily produced body and the decoder that turns a successful response
//! into a typed value. Nothing touches the network until a
//! [`Client`](crate::Client) executes it.
//!
//! The decoder is a type parameter, so a request carries at most one of
//! [`Discard`] (the default), [`Json<T>`] or [`Binary`].
//!
//! # Example
//!
//! ```rust
//! use shippinglabel::clients::{HttpMethod, HttpRequest};
//! use serde_json::json;
//!
//! let address = json!({"city": "Berlin"});
//! let request = HttpRequest::new("https://api.dev.shippinglabel.de/v2")
//!     .method(HttpMethod::Post)
//!     .path("/addresses")
//!     .json(&address)
//!     .expect_json::<serde_json::Value>();
//!
//! assert_eq!(request.url(), "https://api.dev.shippinglabel.de/v2/addresses");
//! assert_eq!(
//!     request.get_header("content-type"),
//!     Some("application/json; charset=utf-8")
//! );
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::marker::PhantomData;

use base64::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::Error;

/// Content type for JSON bodies and the JSON `Accept` header.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// Content type for form-encoded bodies.
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    #[default]
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP DELETE.
    Delete,
}

impl HttpMethod {
    const fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Turns the body of a successful response into a value.
pub trait ResponseDecoder {
    /// The decoded value.
    type Output;

    /// Decodes a fully read response body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the body does not have the expected shape.
    fn decode(self, body: &[u8]) -> Result<Self::Output, Error>;
}

/// No decoder: the body is read to the end and dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct Discard;

impl ResponseDecoder for Discard {
    type Output = ();

    fn decode(self, _body: &[u8]) -> Result<(), Error> {
        Ok(())
    }
}

/// Parses the body as JSON into `T`.
pub struct Json<T>(PhantomData<fn() -> T>);

impl<T> Default for Json<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> fmt::Debug for Json<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Json<{}>", std::any::type_name::<T>())
    }
}

impl<T: DeserializeOwned> ResponseDecoder for Json<T> {
    type Output = T;

    fn decode(self, body: &[u8]) -> Result<T, Error> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Copies the raw body, e.g. a PDF label.
#[derive(Clone, Copy, Debug, Default)]
pub struct Binary;

impl ResponseDecoder for Binary {
    type Output = Vec<u8>;

    fn decode(self, body: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(body.to_vec())
    }
}

type BodyProducer<'a> = Box<dyn FnOnce() -> io::Result<Vec<u8>> + Send + 'a>;

/// A single outbound call, built fluently and executed by a
/// [`Client`](crate::Client).
///
/// Header keys are stored lower-cased; setting the same header twice keeps
/// the last value.
pub struct HttpRequest<'a, D = Discard> {
    base_url: String,
    path: String,
    method: HttpMethod,
    query: Vec<(String, String)>,
    headers: HashMap<String, String>,
    body: Option<BodyProducer<'a>>,
    decoder: D,
}

impl<'a> HttpRequest<'a, Discard> {
    /// Creates a GET request against `base_url` with no path, body or decoder.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            path: String::new(),
            method: HttpMethod::Get,
            query: Vec::new(),
            headers: HashMap::new(),
            body: None,
            decoder: Discard,
        }
    }
}

impl<'a, D> HttpRequest<'a, D> {
    /// Sets the base URL.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the path appended to the base URL, e.g. `/addresses`.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the path from a format template:
    /// `.path_fmt(format_args!("/addresses/{}", id))`.
    #[must_use]
    pub fn path_fmt(self, args: fmt::Arguments<'_>) -> Self {
        self.path(fmt::format(args))
    }

    /// Sets the HTTP method.
    #[must_use]
    pub const fn method(mut self, method: HttpMethod) -> Self {
        self.method = method;
        self
    }

    /// Appends a query parameter; parameters are sent in insertion order.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets a header, replacing any previous value for the same key.
    #[must_use]
    pub fn header(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_header(key, value);
        self
    }

    /// Sets a header in place.
    pub fn set_header(&mut self, key: &str, value: impl Into<String>) {
        self.headers.insert(key.to_ascii_lowercase(), value.into());
    }

    /// Sets the `Content-Type` header.
    #[must_use]
    pub fn content_type(self, content_type: &str) -> Self {
        self.header("Content-Type", content_type)
    }

    /// Sets the `Accept` header.
    #[must_use]
    pub fn accept(self, content_type: &str) -> Self {
        self.header("Accept", content_type)
    }

    /// Sets `Authorization: Bearer <token>`.
    #[must_use]
    pub fn bearer(mut self, token: &str) -> Self {
        self.set_bearer(token);
        self
    }

    /// Sets `Authorization: Bearer <token>` in place.
    pub fn set_bearer(&mut self, token: &str) {
        self.set_header("Authorization", format!("Bearer {token}"));
    }

    /// Sets `Authorization: Basic <base64(username:password)>`.
    #[must_use]
    pub fn basic_auth(self, username: &str, password: &str) -> Self {
        let credentials = BASE64_STANDARD.encode(format!("{username}:{password}"));
        self.header("Authorization", format!("Basic {credentials}"))
    }

    /// Serializes `body` as JSON when the request is materialized.
    #[must_use]
    pub fn json<T>(mut self, body: &'a T) -> Self
    where
        T: Serialize + Sync + ?Sized,
    {
        self.body = Some(Box::new(move || {
            serde_json::to_vec(body).map_err(io::Error::from)
        }));
        self.content_type(CONTENT_TYPE_JSON)
    }

    /// Sends `pairs` as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn form<K, V>(mut self, pairs: &[(K, V)]) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let encoded = pairs
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    urlencoding::encode(k.as_ref()),
                    urlencoding::encode(v.as_ref())
                )
            })
            .collect::<Vec<_>>()
            .join("&");
        self.body = Some(Box::new(move || Ok(encoded.into_bytes())));
        self.content_type(CONTENT_TYPE_FORM)
    }

    /// Sends raw bytes with the given content type.
    #[must_use]
    pub fn raw(mut self, bytes: impl Into<Vec<u8>>, content_type: &str) -> Self {
        let bytes = bytes.into();
        self.body = Some(Box::new(move || Ok(bytes)));
        self.content_type(content_type)
    }

    /// Decodes a successful response as JSON into `T` and sets the `Accept`
    /// header accordingly.
    #[must_use]
    pub fn expect_json<T: DeserializeOwned>(self) -> HttpRequest<'a, Json<T>> {
        self.with_decoder(Json::default()).accept(CONTENT_TYPE_JSON)
    }

    /// Returns a successful response body as raw bytes. `Accept` is left
    /// untouched.
    #[must_use]
    pub fn expect_binary(self) -> HttpRequest<'a, Binary> {
        self.with_decoder(Binary)
    }

    fn with_decoder<E>(self, decoder: E) -> HttpRequest<'a, E> {
        HttpRequest {
            base_url: self.base_url,
            path: self.path,
            method: self.method,
            query: self.query,
            headers: self.headers,
            body: self.body,
            decoder,
        }
    }

    /// Returns the full URL without the query string.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Returns the configured path.
    #[must_use]
    pub fn get_path(&self) -> &str {
        &self.path
    }

    /// Returns the configured method.
    #[must_use]
    pub const fn get_method(&self) -> HttpMethod {
        self.method
    }

    /// Returns the query parameters in the order they will be sent.
    #[must_use]
    pub fn get_query(&self) -> &[(String, String)] {
        &self.query
    }

    /// Looks up a header, ignoring case.
    #[must_use]
    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .get(&key.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns `true` if a body producer has been set.
    #[must_use]
    pub const fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Splits off the decoder so the request can be materialized on its own.
    pub(crate) fn split(self) -> (HttpRequest<'a, Discard>, D) {
        let HttpRequest {
            base_url,
            path,
            method,
            query,
            headers,
            body,
            decoder,
        } = self;
        let request = HttpRequest {
            base_url,
            path,
            method,
            query,
            headers,
            body,
            decoder: Discard,
        };
        (request, decoder)
    }

    /// Runs the body producer and builds the `reqwest` request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Body`] if the body cannot be produced and
    /// [`Error::Transport`] if the URL or a header is invalid.
    pub fn materialize(self, client: &reqwest::Client) -> Result<reqwest::Request, Error> {
        let mut builder = client.request(self.method.as_reqwest(), self.url());

        if !self.query.is_empty() {
            builder = builder.query(&self.query);
        }

        for (key, value) in &self.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }

        if let Some(produce) = self.body {
            builder = builder.body(produce()?);
        }

        Ok(builder.build()?)
    }
}

impl<D: fmt::Debug> fmt::Debug for HttpRequest<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_names: Vec<&str> = self.headers.keys().map(String::as_str).collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url())
            .field("query", &self.query)
            .field("headers", &header_names)
            .field("has_body", &self.body.is_some())
            .field("decoder", &self.decoder)
            .finish()
    }
}
