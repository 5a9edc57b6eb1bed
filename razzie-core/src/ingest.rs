//! CSV ingestion for the awards dataset.
//!
//! The dataset is a semicolon-delimited, headered CSV with the columns
//! `year;title;studios;producers;winner`. The `winner` column holds `yes`
//! for winning movies and is empty (or anything else) for nominees.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::IngestError;
use crate::model::Movie;

/// One raw CSV row before validation.
///
/// `year` is read as text so a bad value can be reported with its line
/// number instead of failing inside serde.
#[derive(Debug, Deserialize)]
struct CsvRow {
    year: String,
    title: String,
    #[serde(default)]
    studios: String,
    producers: String,
    #[serde(default)]
    winner: String,
}

/// Load the movie dataset from a CSV file on disk.
pub fn load_movies(path: &Path) -> Result<Vec<Movie>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_movies(file)
}

/// Read the movie dataset from any CSV source.
///
/// A headers-only input is valid and yields an empty vec. Malformed rows
/// abort the load with the offending line number; line 1 is the header.
pub fn read_movies<R: Read>(reader: R) -> Result<Vec<Movie>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(false)
        .from_reader(reader);

    let mut movies = Vec::new();
    for (index, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let line = index as u64 + 2;
        let row = result.map_err(|e| IngestError::Malformed {
            line,
            message: e.to_string(),
        })?;
        movies.push(validate_row(row, line)?);
    }
    tracing::debug!(movies = movies.len(), "loaded dataset rows");
    Ok(movies)
}

fn validate_row(row: CsvRow, line: u64) -> Result<Movie, IngestError> {
    let year = row
        .year
        .trim()
        .parse::<i32>()
        .map_err(|_| IngestError::InvalidYear {
            line,
            value: row.year.trim().to_string(),
        })?;
    let studios = match row.studios.trim() {
        "" => None,
        s => Some(s.to_string()),
    };
    Ok(Movie {
        year,
        title: row.title.trim().to_string(),
        studios,
        producers: row.producers.trim().to_string(),
        winner: row.winner.trim().eq_ignore_ascii_case("yes"),
    })
}
