//! Dataset model for the Golden Raspberry Awards "Worst Film" category.

use serde::{Deserialize, Serialize};

use crate::intervals::WinRecord;

/// A movie record loaded from the awards dataset.
///
/// Each record represents a movie that was either a nominee or winner in
/// the "Worst Film" category of a given year. Records are immutable once
/// loaded; the analyzer never mutates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Award edition year.
    pub year: i32,
    /// Movie title.
    pub title: String,
    /// Studios credit, if present in the dataset.
    pub studios: Option<String>,
    /// Free-text producer credits, possibly naming several producers.
    pub producers: String,
    /// Whether the movie won the award (as opposed to being a nominee).
    pub winner: bool,
}

impl Movie {
    /// Project this movie into the analyzer's input shape.
    ///
    /// Only meaningful for winners; the store filters before projecting.
    pub fn win_record(&self) -> WinRecord {
        WinRecord {
            year: self.year,
            producers: self.producers.clone(),
        }
    }
}
