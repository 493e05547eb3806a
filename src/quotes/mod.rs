//! Daily quote source: a CSV table with a built-in fallback, behind a TTL cache.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ChronosError, ChronosResult};

/// One quote with attribution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Quote body, without surrounding quote marks.
    pub text: String,
    /// Attribution shown after an em dash.
    pub author: String,
}

impl Quote {
    /// Build a quote from borrowed parts.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

const FALLBACK: &[(&str, &str)] = &[
    ("The future depends on what you do today.", "Mahatma Gandhi"),
    ("Time is the most valuable thing a man can spend.", "Theophrastus"),
    ("Action is the foundational key to all success.", "Pablo Picasso"),
    ("Don't count the days, make the days count.", "Muhammad Ali"),
    ("Your time is limited, so don't waste it.", "Steve Jobs"),
    ("Focus on being productive instead of busy.", "Tim Ferriss"),
    ("Simplicity is the ultimate sophistication.", "Leonardo da Vinci"),
    ("Do it now. Sometimes 'later' becomes 'never'.", "Unknown"),
];

/// Non-empty, ordered quote table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    /// The built-in table.
    pub fn fallback() -> Self {
        Self {
            quotes: FALLBACK.iter().map(|(t, a)| Quote::new(*t, *a)).collect(),
        }
    }

    /// Wrap `quotes`; an empty list is rejected.
    pub fn new(quotes: Vec<Quote>) -> ChronosResult<Self> {
        if quotes.is_empty() {
            return Err(ChronosError::resource_missing("quote table is empty"));
        }
        Ok(Self { quotes })
    }

    /// Parse CSV content and reject it if no row parsed.
    pub fn from_csv(content: &str) -> ChronosResult<Self> {
        Self::new(parse_quotes_csv(content))
    }

    pub(crate) fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Quote for a 1-based day of the year: index `day_of_year % len`.
    pub fn quote_for_day(&self, day_of_year: u32) -> &Quote {
        &self.quotes[day_of_year as usize % self.quotes.len()]
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Parse `"text","author"` rows. The first line is a header; rows that do not match are skipped.
pub fn parse_quotes_csv(content: &str) -> Vec<Quote> {
    content
        .trim()
        .lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<Quote> {
    // Segments between double quotes: `"a","b"` splits into ["", "a", ",", "b", ""].
    let parts: Vec<&str> = line.split('"').collect();
    (1..parts.len().saturating_sub(3))
        .find(|&i| parts[i + 1] == ",")
        .map(|i| Quote::new(parts[i], parts[i + 2]))
}

/// Quote table reloaded from disk once its TTL elapses.
///
/// Load failures never surface to callers: they are logged and the fallback table is served.
#[derive(Debug)]
pub struct QuoteCache {
    path: Option<PathBuf>,
    ttl: Duration,
    state: RwLock<Option<(Instant, Arc<QuoteBook>)>>,
}

impl QuoteCache {
    /// Cache over `path` (or the fallback table when `None`).
    pub fn new(path: Option<PathBuf>, ttl: Duration) -> Self {
        Self {
            path,
            ttl,
            state: RwLock::new(None),
        }
    }

    /// Current table, reloading if stale.
    pub fn book(&self) -> Arc<QuoteBook> {
        self.book_at(Instant::now())
    }

    /// Current table as seen at `now`.
    pub fn book_at(&self, now: Instant) -> Arc<QuoteBook> {
        if let Ok(guard) = self.state.read()
            && let Some((loaded_at, book)) = guard.as_ref()
            && now.saturating_duration_since(*loaded_at) < self.ttl
        {
            return book.clone();
        }

        let book = Arc::new(self.load());
        match self.state.write() {
            Ok(mut guard) => *guard = Some((now, book.clone())),
            Err(_) => tracing::warn!("quote cache lock poisoned; serving uncached table"),
        }
        book
    }

    /// Quote for `day_of_year` from the current table.
    pub fn quote_for_day(&self, day_of_year: u32) -> Quote {
        self.book().quote_for_day(day_of_year).clone()
    }

    fn load(&self) -> QuoteBook {
        let Some(path) = &self.path else {
            return QuoteBook::fallback();
        };
        let loaded = std::fs::read_to_string(path)
            .map_err(|err| ChronosError::resource_missing(err.to_string()))
            .and_then(|content| QuoteBook::from_csv(&content));
        match loaded {
            Ok(book) => {
                tracing::info!(path = %path.display(), quotes = book.len(), "quotes loaded");
                book
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "using fallback quotes");
                QuoteBook::fallback()
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quotes/mod.rs"]
mod tests;
