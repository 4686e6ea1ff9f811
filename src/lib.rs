//! country_json
//!
//! A small Rust library for turning the REST Countries API into a localized
//! `countries.json`. Pairs with the `country-json` CLI.
//!
//! ### Features
//! - Fetch all countries in one request (or load a saved response)
//! - Country names, continents, regions and subregions in German, English,
//!   French, Italian and Spanish
//! - Flag emoji (derived from the ISO code when the API has none) and
//!   international dialing codes
//! - Save as pretty JSON (camelCase keys) or a flat CSV table
//! - Per-continent counts
//!
//! ### Example
//! ```no_run
//! use country_json::{Client, stats, storage, transform};
//!
//! let client = Client::default();
//! let records = client.fetch()?;
//! let countries = transform::transform_all(&records);
//! storage::save_json(&countries, "countries.json")?;
//! for c in stats::top_continents(&countries, 10) {
//!     println!("{}: {}", c.continent.english, c.count);
//! }
//! # Ok::<(), country_json::Error>(())
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod regions;
pub mod stats;
pub mod storage;
pub mod transform;

pub use api::Client;
pub use error::{Error, Result};
pub use models::{ApiCountry, CountryData, Language, LocalizedNames};
