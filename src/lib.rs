//! Dice roller service library.
//!
//! Serves `GET /rolldice` with a random face in `1..=6`, optionally wrapped in
//! a `roll` span and counted in the `dice.rolls` metric.

pub mod config;
pub mod dice;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::DiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
