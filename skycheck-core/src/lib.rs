//! Core library for the `skycheck` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather client and response mapping
//! - Icon and advice derivation
//! - Shared domain models (requests, observations, reports)
//! - Front-end session state
//!
//! It is used by `skycheck-cli`, but can also be reused by other front ends.

pub mod advice;
pub mod config;
pub mod error;
pub mod icon;
pub mod mapper;
pub mod model;
pub mod provider;
pub mod service;
pub mod session;

pub use advice::{AdviceBand, advise};
pub use config::Config;
pub use error::{FetchError, InvalidObservation, ParseUnitError, WeatherError};
pub use icon::{IconKind, select_icon};
pub use model::{Unit, WeatherObservation, WeatherReport, WeatherRequest};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use service::WeatherService;
pub use session::{LookupOutcome, ResultsView, SearchView, Session, View};
