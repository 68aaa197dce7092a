//! # Storage Windows
//!
//! How long prepared food keeps, as a use-by date. The preparation date is
//! always passed in; nothing here reads the clock.

use crate::container_catalog::StorageKind;
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const FRIDGE_SHELF_LIFE_DAYS: u64 = 4;
pub const FREEZER_SHELF_LIFE_DAYS: u64 = 90;

/// Use-by information for food stored one way
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageWindow {
    pub kind: StorageKind,
    pub prepared_on: NaiveDate,
    pub use_by: NaiveDate,
    pub shelf_life_days: u64,
}

impl StorageWindow {
    /// Days left on `today`; zero once the window has passed
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.use_by - today).num_days().max(0)
    }
}

/// Shelf life in days for food kept in `kind` storage
pub fn shelf_life_days(kind: StorageKind) -> u64 {
    match kind {
        StorageKind::Freezer => FREEZER_SHELF_LIFE_DAYS,
        _ => FRIDGE_SHELF_LIFE_DAYS,
    }
}

/// Use-by window for food prepared on `prepared_on`
pub fn storage_window(prepared_on: NaiveDate, kind: StorageKind) -> StorageWindow {
    let days = shelf_life_days(kind);
    StorageWindow {
        kind,
        prepared_on,
        use_by: prepared_on
            .checked_add_days(Days::new(days))
            .unwrap_or(NaiveDate::MAX),
        shelf_life_days: days,
    }
}
