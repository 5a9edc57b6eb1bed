//! In-memory movie store.
//!
//! Holds the full loaded dataset for the lifetime of the process. The
//! store is immutable after construction and is shared across requests
//! behind an `Arc`, so request handlers need no further synchronization.

use std::path::Path;

use crate::error::IngestError;
use crate::ingest;
use crate::intervals::{IntervalReport, WinRecord, compute_intervals};
use crate::model::Movie;

/// Immutable, in-memory collection of award records.
#[derive(Debug, Clone, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Create a store from already-loaded records.
    pub fn new(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Load a store from a CSV dataset on disk.
    pub fn from_csv_path(path: &Path) -> Result<Self, IngestError> {
        Ok(Self::new(ingest::load_movies(path)?))
    }

    /// All records, winners and nominees alike.
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Number of winning records.
    pub fn winner_count(&self) -> usize {
        self.movies.iter().filter(|m| m.winner).count()
    }

    /// The winning records, projected into the analyzer's input shape.
    pub fn winners(&self) -> Vec<WinRecord> {
        self.movies
            .iter()
            .filter(|m| m.winner)
            .map(Movie::win_record)
            .collect()
    }

    /// Run the interval analysis over the winners held by this store.
    pub fn prize_intervals(&self) -> IntervalReport {
        let winners = self.winners();
        tracing::debug!(winners = winners.len(), "analyzing winning movies");
        compute_intervals(&winners)
    }
}
