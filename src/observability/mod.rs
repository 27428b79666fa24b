//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → spans.rs (roll span, roll.value attribute)
//!     → metrics.rs (dice.rolls counter tagged by roll.value)
//!     → logging.rs (structured log events, span close records)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Prometheus scrape endpoint on its own listener
//! ```
//!
//! # Design Decisions
//! - Handlers only record in-process; export happens out of band
//! - Counter handles are injected, not looked up inside handlers
//! - Span attribute and counter label come from one value

pub mod logging;
pub mod metrics;
pub mod spans;
