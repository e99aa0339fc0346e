use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::collections::BTreeMap;

/// Aggregated log records, keyed by the date of the file they came from.
///
/// Within a date bucket, records stay in insertion order (file-read order),
/// even when their times are out of chronological order; iteration across
/// buckets is always date-ascending. Time-range bounds are computed by the
/// session with a full scan, never inferred from this ordering.
#[derive(Debug, Default)]
pub struct LogStore {
    logs: BTreeMap<NaiveDate, Vec<(NaiveTime, String)>>,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its date bucket, creating the bucket if absent.
    pub fn add(&mut self, date: NaiveDate, time: NaiveTime, text: String) {
        self.logs.entry(date).or_default().push((time, text));
    }

    /// All records, dates ascending, insertion order within a date.
    pub fn all_records(&self) -> impl Iterator<Item = (NaiveDate, NaiveTime, &str)> + '_ {
        self.logs.iter().flat_map(|(date, entries)| {
            entries
                .iter()
                .map(move |(time, text)| (*date, *time, text.as_str()))
        })
    }

    /// Records within `[start, end]`, both bounds inclusive.
    ///
    /// Filters by whole calendar date first, then by exact datetime within
    /// the qualifying dates; ordering matches `all_records`.
    pub fn records_between(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Vec<(NaiveDate, NaiveTime, &str)> {
        self.logs
            .range(start.date()..=end.date())
            .flat_map(|(date, entries)| {
                entries.iter().filter_map(move |(time, text)| {
                    let at = date.and_time(*time);
                    (start <= at && at <= end).then_some((*date, *time, text.as_str()))
                })
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        s.parse().unwrap()
    }

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    fn sample() -> LogStore {
        let mut store = LogStore::new();
        // Second date inserted first; times deliberately out of order
        store.add(date("2024-03-02"), time("08:00:00"), "second day".into());
        store.add(date("2024-03-01"), time("12:00:00"), "noon".into());
        store.add(date("2024-03-01"), time("09:00:00"), "morning".into());
        store.add(date("2024-03-01"), time("18:00:00"), "evening".into());
        store
    }

    #[test]
    fn test_dates_ascending_insertion_order_within_date() {
        let store = sample();
        let texts: Vec<_> = store.all_records().map(|(_, _, t)| t).collect();
        // 2024-03-01 first despite being inserted second; its records keep
        // file-read order, not time order
        assert_eq!(texts, vec!["noon", "morning", "evening", "second day"]);
    }

    #[test]
    fn test_records_between_inclusive_bounds() {
        let store = sample();
        let hits = store.records_between(dt("2024-03-01 09:00:00"), dt("2024-03-01 12:00:00"));
        let texts: Vec<_> = hits.iter().map(|(_, _, t)| *t).collect();
        assert_eq!(texts, vec!["noon", "morning"]);
    }

    #[test]
    fn test_records_between_full_range_returns_everything() {
        let store = sample();
        let hits = store.records_between(dt("2024-03-01 00:00:00"), dt("2024-03-02 23:59:59"));
        assert_eq!(hits.len(), store.len());
    }

    #[test]
    fn test_records_between_spanning_dates() {
        let store = sample();
        let hits = store.records_between(dt("2024-03-01 18:00:00"), dt("2024-03-02 08:00:00"));
        let texts: Vec<_> = hits.iter().map(|(_, _, t)| *t).collect();
        assert_eq!(texts, vec!["evening", "second day"]);
    }

    #[test]
    fn test_records_between_empty_window() {
        let store = sample();
        let hits = store.records_between(dt("2024-03-03 00:00:00"), dt("2024-03-04 00:00:00"));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_len_and_is_empty() {
        assert!(LogStore::new().is_empty());
        let store = sample();
        assert_eq!(store.len(), 4);
        assert!(!store.is_empty());
    }
}
