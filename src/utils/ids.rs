//! Sequential identifier generation.
//!
//! Identifiers combine a wall-clock millisecond timestamp with a process-local
//! counter, so they are unique within one store instance and sortable by
//! creation time.

use chrono::Utc;

/// Monotonic id source for one store instance.
///
/// Produces ids of the form `{prefix}-{unix_millis}-{counter}`. The counter
/// increments before every id, so two ids minted in the same millisecond
/// still differ.
#[derive(Debug, Default)]
pub struct IdSequence {
    counter: u64,
}

impl IdSequence {
    /// Creates a sequence starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence whose next id uses `counter + 1`.
    ///
    /// Seeded stores start above their preloaded fixture ids.
    pub fn starting_at(counter: u64) -> Self {
        Self { counter }
    }

    /// Mints the next identifier for the given prefix.
    pub fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), self.counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_has_prefix_and_three_segments() {
        let mut seq = IdSequence::new();
        let id = seq.next("app");

        let parts: Vec<&str> = id.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "app");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2], "1");
    }

    #[test]
    fn test_counter_increments_per_call() {
        let mut seq = IdSequence::new();
        let first = seq.next("usage");
        let second = seq.next("usage");

        assert!(first.ends_with("-1"));
        assert!(second.ends_with("-2"));
        assert_ne!(first, second);
    }

    #[test]
    fn test_counter_is_shared_across_prefixes() {
        let mut seq = IdSequence::new();
        let app_id = seq.next("app");
        let domain_id = seq.next("domain");

        assert!(app_id.ends_with("-1"));
        assert!(domain_id.ends_with("-2"));
    }

    #[test]
    fn test_starting_at_resumes_above_seed() {
        let mut seq = IdSequence::starting_at(10);
        let id = seq.next("review");

        assert!(id.starts_with("review-"));
        assert!(id.ends_with("-11"));
    }

    #[test]
    fn test_ids_are_unique_in_bulk() {
        let mut seq = IdSequence::new();
        let mut seen = std::collections::HashSet::new();

        for _ in 0..1000 {
            assert!(seen.insert(seq.next("x")));
        }
    }
}
