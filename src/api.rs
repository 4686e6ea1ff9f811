//! Synchronous client for the **REST Countries API (v3.1)**.
//!
//! One request to the `all` endpoint with a field selection is enough to
//! build the whole output; there is no pagination and no retry.
//!
//! ### Notes
//! - The API occasionally omits fields or sends `null`; decoding treats both
//!   (and wrong-typed values) as absent instead of failing the whole body.
//! - No timeout is set unless one is passed to [`Client::new`]; reqwest's
//!   blocking default applies.
//!
//! Typical usage:
//! ```no_run
//! # use country_json::Client;
//! let client = Client::default();
//! let records = client.fetch()?;
//! let countries = country_json::transform::transform_all(&records);
//! # Ok::<(), country_json::Error>(())
//! ```
use crate::error::{Error, Result};
use crate::models::ApiCountry;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";

/// Fields requested from the `all` endpoint; everything the transform reads.
pub const FIELDS: &[&str] = &[
    "cca2",
    "flag",
    "name",
    "translations",
    "region",
    "subregion",
    "continents",
    "idd",
];

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None).expect("reqwest client build")
    }
}

// Allow -, _, . unescaped in field names
const SAFE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

fn enc_join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(|s| percent_encoding::utf8_percent_encode(s.trim(), SAFE).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl Client {
    /// Build a client against `base_url` (e.g. [`DEFAULT_BASE_URL`]).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("country-json/", env!("CARGO_PKG_VERSION")));
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let http = builder.build().map_err(|source| Error::Request {
            url: base_url.to_owned(),
            source,
        })?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http,
        })
    }

    /// URL of the `all` endpoint with the field selection applied.
    pub fn all_url(&self) -> String {
        format!("{}/all?fields={}", self.base_url, enc_join(FIELDS.iter().copied()))
    }

    /// GET the `all` endpoint and return the raw body.
    ///
    /// ### Errors
    /// - transport failure ([`Error::Request`])
    /// - any non-2xx status ([`Error::Status`])
    pub fn fetch_raw(&self) -> Result<String> {
        let url = self.all_url();
        log::debug!("GET {url}");
        let request_err = |source: reqwest::Error| Error::Request {
            url: url.clone(),
            source,
        };
        let resp = self.http.get(&url).send().map_err(request_err)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.clone(),
                status,
            });
        }
        let body = resp.text().map_err(request_err)?;
        log::debug!("received {} bytes", body.len());
        Ok(body)
    }

    /// Fetch and decode all countries.
    pub fn fetch(&self) -> Result<Vec<ApiCountry>> {
        parse_countries(&self.fetch_raw()?)
    }
}

/// Decode an `all` response body.
///
/// The body must be a JSON array. Elements that are not objects are skipped;
/// fields inside an object never fail the parse (see `models`).
pub fn parse_countries(body: &str) -> Result<Vec<ApiCountry>> {
    let v: Value = serde_json::from_str(body)?;
    let Value::Array(items) = v else {
        return Err(Error::Shape("not a top-level array".into()));
    };

    let total = items.len();
    let mut out = Vec::with_capacity(total);
    for (idx, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            log::warn!("skipping element {idx}: expected an object");
            continue;
        }
        out.push(serde_json::from_value(item)?);
    }
    log::debug!("decoded {} of {} records", out.len(), total);
    Ok(out)
}

/// Read a previously saved `all` response from disk and decode it.
pub fn load_countries<P: AsRef<Path>>(path: P) -> Result<Vec<ApiCountry>> {
    let path = path.as_ref();
    let body = std::fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_countries(&body)
}
