// In-memory result of one fetch: records in fetch order, which is also
// chronological order. Pages are merged here.
use shared::models::OhlcRecord;
use std::ops::Range;

// What happened to the records of one page when it was merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AppendStats {
    pub appended: usize,
    // Not strictly after the last kept record (the boundary record repeated
    // by the next page, or anything out of order).
    pub duplicates: usize,
    pub out_of_window: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<OhlcRecord>,
}

impl Dataset {
    pub fn new() -> Self {
        Dataset { records: Vec::new() }
    }

    // Appends a page, keeping only records inside `window` whose timestamp is
    // strictly greater than the last kept one. Timestamps in the dataset are
    // therefore strictly increasing.
    pub fn append_page(&mut self, page: &[OhlcRecord], window: &Range<i64>) -> AppendStats {
        let mut stats = AppendStats::default();
        for record in page {
            if !window.contains(&record.timestamp) {
                stats.out_of_window += 1;
                continue;
            }
            if self.last_timestamp().is_some_and(|last| record.timestamp <= last) {
                stats.duplicates += 1;
                continue;
            }
            self.records.push(*record);
            stats.appended += 1;
        }
        stats
    }

    pub fn records(&self) -> &[OhlcRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn head(&self, n: usize) -> &[OhlcRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn last_timestamp(&self) -> Option<i64> {
        self.records.last().map(|r| r.timestamp)
    }

}

impl From<Vec<OhlcRecord>> for Dataset {
    // Trusts the caller for ordering, e.g. records read back from an export.
    fn from(records: Vec<OhlcRecord>) -> Self {
        Dataset { records }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: i64) -> OhlcRecord {
        OhlcRecord { timestamp, open: 1.0, high: 2.0, low: 0.5, close: 1.5, volume: 10.0 }
    }

    #[test]
    fn test_append_keeps_order() {
        let mut dataset = Dataset::new();
        let stats = dataset.append_page(&[record(0), record(900), record(1800)], &(0..10_000));
        assert_eq!(stats, AppendStats { appended: 3, duplicates: 0, out_of_window: 0 });
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.last_timestamp(), Some(1800));
    }

    #[test]
    fn test_boundary_record_deduplicated() {
        let mut dataset = Dataset::new();
        dataset.append_page(&[record(0), record(900)], &(0..10_000));
        let stats = dataset.append_page(&[record(900), record(1800)], &(0..10_000));
        assert_eq!(stats.appended, 1);
        assert_eq!(stats.duplicates, 1);
        let timestamps: Vec<i64> = dataset.records().iter().map(|r| r.timestamp).collect();
        assert_eq!(timestamps, vec![0, 900, 1800]);
    }

    #[test]
    fn test_out_of_window_records_dropped() {
        let mut dataset = Dataset::new();
        let stats = dataset.append_page(&[record(-900), record(0), record(900), record(1800)], &(0..1800));
        assert_eq!(stats.appended, 2);
        assert_eq!(stats.out_of_window, 2);
    }

    #[test]
    fn test_head_clamps_to_len() {
        let mut dataset = Dataset::new();
        assert!(dataset.head(5).is_empty());
        dataset.append_page(&[record(0), record(900)], &(0..10_000));
        assert_eq!(dataset.head(5).len(), 2);
        assert_eq!(dataset.head(1)[0].timestamp, 0);
    }
}
