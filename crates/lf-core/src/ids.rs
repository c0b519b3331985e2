//! Timestamp-based ID generation.
//!
//! IDs are epoch milliseconds rendered as decimal text, the format the board
//! has always stored. The generator guarantees strict monotonicity and skips
//! any candidate already in use, so two records created within the same
//! millisecond still get distinct IDs.

use chrono::{DateTime, Utc};

/// Issues unique, monotonically increasing record IDs.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Seed the generator from IDs already present in loaded collections.
    ///
    /// Non-numeric IDs are ignored for seeding; they can still never collide
    /// with a generated ID because the `is_taken` check in [`Self::next`]
    /// covers them.
    pub fn seeded<'a>(existing: impl IntoIterator<Item = &'a str>) -> Self {
        let last = existing
            .into_iter()
            .filter_map(|id| id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Produce the next ID for a record created at `now`.
    ///
    /// Once the numeric range is exhausted, IDs take the form
    /// `<i64::MAX>-<n>` with the first free `n`.
    pub fn next(&mut self, now: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
        let Some(after) = self.last.checked_add(1) else {
            return suffixed(self.last, &is_taken);
        };
        let mut candidate = now.timestamp_millis().max(after);
        loop {
            let id = candidate.to_string();
            if !is_taken(&id) {
                self.last = candidate;
                return id;
            }
            let Some(bumped) = candidate.checked_add(1) else {
                self.last = candidate;
                return suffixed(candidate, &is_taken);
            };
            candidate = bumped;
        }
    }

    /// The most recently issued (or seeded) value.
    #[must_use]
    pub const fn last(&self) -> i64 {
        self.last
    }
}

fn suffixed(base: i64, is_taken: &impl Fn(&str) -> bool) -> String {
    let mut n = 1u64;
    loop {
        let id = format!("{base}-{n}");
        if !is_taken(&id) {
            return id;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(ms: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn uses_timestamp_millis() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next(at(1_700_000_000_123), |_| false), "1700000000123");
    }

    #[test]
    fn same_millisecond_yields_distinct_ids() {
        let mut ids = IdGenerator::default();
        let a = ids.next(at(1_000), |_| false);
        let b = ids.next(at(1_000), |_| false);
        assert_eq!(a, "1000");
        assert_eq!(b, "1001");
    }

    #[test]
    fn clock_going_backwards_stays_monotonic() {
        let mut ids = IdGenerator::default();
        ids.next(at(5_000), |_| false);
        assert_eq!(ids.next(at(4_000), |_| false), "5001");
    }

    #[test]
    fn skips_taken_ids() {
        let mut ids = IdGenerator::default();
        let taken = ["2000", "2001"];
        assert_eq!(ids.next(at(2_000), |id| taken.contains(&id)), "2002");
    }

    #[test]
    fn seeding_ignores_non_numeric_ids() {
        let ids = IdGenerator::seeded(["17", "legacy-id", "42"]);
        assert_eq!(ids.last(), 42);
    }

    #[test]
    fn exhausted_range_falls_back_to_suffixes() {
        let max = i64::MAX.to_string();
        let mut ids = IdGenerator::seeded([max.as_str()]);

        let first = ids.next(at(1_000), |id| id == max);
        assert_eq!(first, format!("{max}-1"));

        let taken = [max.clone(), first.clone()];
        let second = ids.next(at(1_000), |id| taken.iter().any(|t| t == id));
        assert_eq!(second, format!("{max}-2"));
    }

    #[test]
    fn taken_id_at_the_top_of_the_range_is_not_reissued() {
        let max = i64::MAX.to_string();
        let mut ids = IdGenerator::seeded([(i64::MAX - 1).to_string().as_str()]);
        assert_eq!(ids.next(at(1_000), |id| id == max), format!("{max}-1"));
    }
}
