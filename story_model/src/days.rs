//! In-story days and chronological ordering of day-bearing records.

/// A day number in the story's calendar.
pub type Day = i64;

/// Placeholder day used where a record has no known day.
pub const UNKNOWN_DAY: Day = -1;

/// Records that happen on one or more days.
pub trait Dated {
    /// The days of this record, ascending.
    fn days(&self) -> &[Day];

    /// Sort key of the record: its earliest day, or [`UNKNOWN_DAY`] if it has none.
    fn first_day(&self) -> Day {
        self.days().first().copied().unwrap_or(UNKNOWN_DAY)
    }
}

/// Stable sort of records by their first day.
pub fn sort_by_days<T: Dated>(items: &mut [T]) {
    items.sort_by_key(|item| item.first_day());
}

/// Sort a day list in place.
pub fn normalize_days(days: &mut [Day]) {
    days.sort_unstable();
}

/// Merge two day lists into a new ascending list, keeping duplicates.
pub fn merge_days(a: &[Day], b: &[Day]) -> Vec<Day> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    merged.extend_from_slice(a);
    merged.extend_from_slice(b);
    normalize_days(&mut merged);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str, Vec<Day>);

    impl Dated for Item {
        fn days(&self) -> &[Day] {
            &self.1
        }
    }

    #[test]
    fn test_sort_by_days_orders_by_first_day() {
        let mut items = vec![
            Item("c", vec![9]),
            Item("a", vec![1, 20]),
            Item("b", vec![4]),
        ];
        sort_by_days(&mut items);

        let order: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_days_is_stable_and_idempotent() {
        let mut items = vec![
            Item("first", vec![5]),
            Item("early", vec![2]),
            Item("second", vec![5, 6]),
            Item("undated", vec![]),
        ];
        sort_by_days(&mut items);
        let once = items.clone();
        sort_by_days(&mut items);

        assert_eq!(items, once);
        let order: Vec<_> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["undated", "early", "first", "second"]);
        assert!(items.windows(2).all(|w| w[0].first_day() <= w[1].first_day()));
    }

    #[test]
    fn test_first_day_of_empty_record() {
        assert_eq!(Item("x", vec![]).first_day(), UNKNOWN_DAY);
    }

    #[test]
    fn test_merge_days_keeps_duplicates_sorted() {
        assert_eq!(merge_days(&[7, 3], &[5, 3]), vec![3, 3, 5, 7]);
        assert_eq!(merge_days(&[], &[2]), vec![2]);
    }
}
