//! # Razzie Core
//!
//! Core library for the Golden Raspberry Awards producer interval service.
//! Provides the dataset model, CSV ingestion, the in-memory movie store,
//! the producer-credit parser, the interval analyzer, configuration, and
//! the HTTP router.

pub mod api;
pub mod config;
pub mod error;
pub mod ingest;
pub mod intervals;
pub mod model;
pub mod producers;
pub mod store;

// Re-export commonly used types at the crate root.
pub use api::{SharedStore, router, run as run_server};
pub use config::{DataConfig, RazzieConfig, ServerConfig};
pub use error::{ConfigError, IngestError, RazzieError, Result};
pub use intervals::{IntervalReport, ProducerInterval, WinRecord, compute_intervals};
pub use model::Movie;
pub use producers::parse_producers;
pub use store::MovieStore;
