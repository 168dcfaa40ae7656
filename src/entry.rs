//! Cached record type and key normalization.
//!
//! Every cached value is an [`Entry`]: the normalized lookup key plus the
//! display payload (city name, country code, population). Keys are composed
//! with [`cache_key`] so that queries differing only in letter case land on
//! the same cache slot.

/// Composes the normalized cache key for a `(country, city)` pair.
///
/// Keys are case-folded and joined as `"<country>|<city>"`. Equality and
/// hashing throughout the cache are purely on this string, so all callers
/// must build keys through this function (or reproduce its normalization
/// exactly).
///
/// # Example
///
/// ```
/// use citycache::entry::cache_key;
///
/// assert_eq!(cache_key("JP", "Tokyo"), "jp|tokyo");
/// assert_eq!(cache_key("jp", "TOKYO"), cache_key("JP", "tokyo"));
/// ```
#[inline]
pub fn cache_key(country: &str, city: &str) -> String {
    let mut key = String::with_capacity(country.len() + city.len() + 1);
    for ch in country.chars() {
        key.extend(ch.to_lowercase());
    }
    key.push('|');
    for ch in city.chars() {
        key.extend(ch.to_lowercase());
    }
    key
}

/// A cached lookup record.
///
/// Immutable once stored except for the payload fields (`city`, `country`,
/// `population`), which may be overwritten in place when the same key is
/// `put` again (refresh, not reinsertion). The `key` never changes for the
/// lifetime of the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Normalized `"<country>|<city>"` lookup key.
    pub key: String,
    /// City name as supplied by the caller (display casing preserved).
    pub city: String,
    /// Country code as supplied by the caller.
    pub country: String,
    /// Population value from the authoritative source.
    pub population: f64,
}

impl Entry {
    /// Creates a new entry.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::entry::{cache_key, Entry};
    ///
    /// let entry = Entry::new(cache_key("JP", "Tokyo"), "Tokyo", "JP", 37_400_068.0);
    /// assert_eq!(entry.key, "jp|tokyo");
    /// assert_eq!(entry.population, 37_400_068.0);
    /// ```
    pub fn new(
        key: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        population: f64,
    ) -> Self {
        Self {
            key: key.into(),
            city: city.into(),
            country: country.into(),
            population,
        }
    }
}
