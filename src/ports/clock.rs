//! Clock port - Source of the current UTC time.

use chrono::{DateTime, Utc};

/// Injectable wall clock so outcome timestamps can be frozen in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
