//! Blocking client for the NASA open data APIs (api.nasa.gov), the JPL
//! Solar System Dynamics APIs, the NASA Image and Video Library, GeneLab,
//! the Exoplanet Archive and the TLE service.
//!
//! ```no_run
//! use nasa_api::{Config, Nasa};
//! use nasa_api::params::MarsRoverParams;
//!
//! let nasa = Nasa::new(Config::new(None))?;
//! let photos = nasa.mars_rover(&MarsRoverParams::default().sol(1000i64).camera("FHAZ"))?;
//! println!("{} photos, {:?} calls left", photos.value.as_array().map_or(0, Vec::len), nasa.limit_remaining());
//! # Ok::<(), nasa_api::NasaError>(())
//! ```
//!
//! Arguments are checked against a static description of each endpoint
//! ([`catalog`]) before anything is sent; see [`validate::prepare`].

pub mod args;
pub mod catalog;
pub mod client;
pub mod config;
pub mod date;
pub mod error;
pub mod http;
pub mod julian;
pub mod params;
pub mod response;
pub mod table;
pub mod types;
pub mod validate;

pub use args::{Arg, Args, ToArgs};
pub use client::{AssetLocator, Nasa};
pub use config::Config;
pub use date::{DateLike, Granularity};
pub use error::{ErrorKind, NasaError, Result, TransportError, ValueError};
pub use julian::{julian_date, julian_date_now, julian_date_ymd};
pub use table::Table;
pub use types::{Captions, Meta, Payload, RateMeta, Response};
