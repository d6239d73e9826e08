use std::sync::Mutex;

use crate::models::reservation::ReservationRecord;

/// How many reservations the history endpoint serves.
pub const RECENT_RESERVATION_LIMIT: usize = 5;

/// Append-only, process-lifetime log of processed reservations. Storage is
/// unbounded, readers only ever ask for the most recent few entries.
pub struct ReservationHistoryRepo {
    records: Mutex<Vec<ReservationRecord>>,
}

impl ReservationHistoryRepo {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    pub fn append(&self, record: ReservationRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// The most recent records, newest first.
    pub fn recent(&self, limit: usize) -> Vec<ReservationRecord> {
        let records = self.records.lock().unwrap();
        records.iter().rev().take(limit).cloned().collect()
    }
}

impl Default for ReservationHistoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime, time};

    use super::*;
    use crate::models::options::{Country, CuisineType};
    use crate::models::reservation::ReservationRequest;

    fn record(day: u8) -> ReservationRecord {
        ReservationRecord {
            timestamp: datetime!(2025-06-01 12:00 UTC) + time::Duration::days(day as i64),
            details: ReservationRequest {
                country: Country::Italy,
                region: "Rome".to_string(),
                cuisine_type: CuisineType::Italian,
                date: date!(2025 - 06 - 15),
                time: time!(20:00),
                email: "a@b.com".to_string(),
                notes: format!("entry {}", day),
            },
            response: format!("response {}", day),
        }
    }

    #[test]
    fn recent_returns_newest_first() {
        let repo = ReservationHistoryRepo::new();
        for day in 0..3 {
            repo.append(record(day));
        }

        let recent = repo.recent(RECENT_RESERVATION_LIMIT);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].response, "response 2");
        assert_eq!(recent[2].response, "response 0");
    }

    #[test]
    fn recent_is_capped_but_storage_is_not() {
        let repo = ReservationHistoryRepo::new();
        for day in 0..8 {
            repo.append(record(day));
        }

        let recent = repo.recent(RECENT_RESERVATION_LIMIT);
        assert_eq!(recent.len(), RECENT_RESERVATION_LIMIT);
        assert_eq!(recent[0].response, "response 7");
        assert_eq!(recent[4].response, "response 3");
    }

    #[test]
    fn empty_history_serves_empty_list() {
        let repo = ReservationHistoryRepo::new();
        assert!(repo.recent(RECENT_RESERVATION_LIMIT).is_empty());
    }
}
