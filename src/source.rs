//! Authoritative lookup backends and the read-through composition.
//!
//! The cache accelerates an authoritative source of population records; this
//! module defines that collaborator. [`PopulationSource`] is the seam:
//! [`CsvSource`] scans a CSV file on every query (deliberately slow, which
//! is what makes caching worthwhile), [`MemorySource`] backs tests and small
//! datasets, and [`CachedLookup`] wires a source together with a
//! [`BoundedCache`] into the read-through flow:
//!
//! ```text
//!   lookup(city, country)
//!        │
//!        ▼
//!   cache_key ──► BoundedCache::get ──hit──► Lookup::CacheHit
//!                      │miss
//!                      ▼
//!                 source.resolve ──found──► cache.put ──► Lookup::SourceHit
//!                      │absent
//!                      ▼
//!                 Lookup::Absent   (absence is never cached)
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::cache::BoundedCache;
use crate::entry::cache_key;
use crate::error::SourceError;

/// An authoritative population lookup.
///
/// Absence of a record is a normal outcome (`Ok(None)`); only I/O and parse
/// failures are errors. Matching is case-insensitive on both fields.
pub trait PopulationSource {
    /// Resolves the population of a city, or `Ok(None)` if unknown.
    fn resolve(&self, city: &str, country: &str) -> Result<Option<f64>, SourceError>;
}

/// File-backed source over a `country,city,population` CSV with a header
/// row.
///
/// Each `resolve` call re-opens and scans the file until the first match, so
/// lookup cost is linear in file size on every query. That is the workload a
/// [`BoundedCache`] in front of it is meant to absorb.
#[derive(Debug, Clone)]
pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    /// Creates a source reading from the given CSV file.
    ///
    /// The file is not touched until the first `resolve` call; a missing
    /// file surfaces there as [`SourceError::Io`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PopulationSource for CsvSource {
    fn resolve(&self, city: &str, country: &str) -> Result<Option<f64>, SourceError> {
        let needle = cache_key(country, city);

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            // Line numbers are 1-based; line 1 is the header.
            if line_no == 0 {
                continue;
            }
            let row = line.trim();
            if row.is_empty() {
                continue;
            }

            let mut fields = row.splitn(3, ',');
            let (row_country, row_city, row_population) =
                match (fields.next(), fields.next(), fields.next()) {
                    (Some(country), Some(city), Some(population)) => {
                        (country.trim(), city.trim(), population.trim())
                    }
                    _ => {
                        return Err(SourceError::Parse {
                            line: line_no + 1,
                            message: format!("expected 3 fields, got {:?}", row),
                        });
                    }
                };

            if cache_key(row_country, row_city) == needle {
                let population: f64 = row_population.parse().map_err(|_| SourceError::Parse {
                    line: line_no + 1,
                    message: format!("invalid population {:?}", row_population),
                })?;
                return Ok(Some(population));
            }
        }

        Ok(None)
    }
}

/// In-memory source over a fixed set of rows.
///
/// # Example
///
/// ```
/// use citycache::source::{MemorySource, PopulationSource};
///
/// let mut source = MemorySource::new();
/// source.insert("JP", "Tokyo", 37_400_068.0);
///
/// assert_eq!(source.resolve("TOKYO", "jp").unwrap(), Some(37_400_068.0));
/// assert_eq!(source.resolve("Atlantis", "??").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    rows: FxHashMap<String, f64>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a row.
    pub fn insert(&mut self, country: &str, city: &str, population: f64) {
        self.rows.insert(cache_key(country, city), population);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the source holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl PopulationSource for MemorySource {
    fn resolve(&self, city: &str, country: &str) -> Result<Option<f64>, SourceError> {
        Ok(self.rows.get(&cache_key(country, city)).copied())
    }
}

/// Outcome of a [`CachedLookup::lookup`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup {
    /// The cache answered; the source was not consulted.
    CacheHit(f64),
    /// The source answered and the record is now cached.
    SourceHit(f64),
    /// Neither the cache nor the source knows the city.
    Absent,
}

impl Lookup {
    /// The resolved population, if any.
    pub fn population(self) -> Option<f64> {
        match self {
            Lookup::CacheHit(p) | Lookup::SourceHit(p) => Some(p),
            Lookup::Absent => None,
        }
    }

    /// Returns `true` if the cache served the query.
    pub fn from_cache(self) -> bool {
        matches!(self, Lookup::CacheHit(_))
    }
}

/// Read-through composition of a [`BoundedCache`] and a
/// [`PopulationSource`].
///
/// # Example
///
/// ```
/// use citycache::cache::{BoundedCache, PolicyKind};
/// use citycache::source::{CachedLookup, Lookup, MemorySource};
///
/// let mut source = MemorySource::new();
/// source.insert("JP", "Tokyo", 37_400_068.0);
///
/// let mut lookup = CachedLookup::new(BoundedCache::new(8, PolicyKind::Lru), source);
///
/// assert_eq!(lookup.lookup("Tokyo", "JP").unwrap(), Lookup::SourceHit(37_400_068.0));
/// assert_eq!(lookup.lookup("tokyo", "jp").unwrap(), Lookup::CacheHit(37_400_068.0));
/// ```
pub struct CachedLookup<S> {
    cache: BoundedCache,
    source: S,
}

impl<S: PopulationSource> CachedLookup<S> {
    /// Wires a cache in front of a source.
    pub fn new(cache: BoundedCache, source: S) -> Self {
        Self { cache, source }
    }

    /// Resolves a city's population through the cache.
    ///
    /// The query is normalized with [`cache_key`], tried against the cache,
    /// and on a miss resolved from the source; a source answer is stored
    /// before returning. Absence is not cached: asking for an unknown city
    /// repeatedly scans the source every time.
    pub fn lookup(&mut self, city: &str, country: &str) -> Result<Lookup, SourceError> {
        let key = cache_key(country, city);

        if let Some(population) = self.cache.get(&key) {
            return Ok(Lookup::CacheHit(population));
        }

        match self.source.resolve(city, country)? {
            Some(population) => {
                self.cache.put(key, city, country, population);
                Ok(Lookup::SourceHit(population))
            }
            None => Ok(Lookup::Absent),
        }
    }

    /// The cache, for stats and snapshot inspection.
    pub fn cache(&self) -> &BoundedCache {
        &self.cache
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Splits the composition back into its parts.
    pub fn into_parts(self) -> (BoundedCache, S) {
        (self.cache, self.source)
    }
}
