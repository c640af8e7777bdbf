// Bounded rejection sampling with an observable fallback.
//
// Several generators draw random candidates and discard ones that fail a
// constraint (viewpoint angular separation, node pairwise separation). The
// policy everywhere is bounded-retry-with-fallback: when the attempt budget
// runs out, the last candidate is accepted regardless of the constraint.
// This keeps generation total — it can degrade, never hang or fail.
//
// `sample_until` makes that policy a single combinator, and `Sampled`
// exposes whether the fallback path was taken so callers and tests can
// observe it instead of guessing from the output.
//
// See also: `viewpoint.rs` and `layout.rs`, the two users of this module.

/// Outcome of a bounded sampling loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sampled<T> {
    pub value: T,
    /// `true` if `value` satisfies the acceptance predicate; `false` if the
    /// attempt budget was exhausted and the last draw was accepted as-is.
    pub satisfied: bool,
}

/// Draw candidates until one is accepted or `max_attempts` draws have been
/// made, then return the last draw with `satisfied = false`.
///
/// Panics if `max_attempts` is zero — there would be no value to return.
pub fn sample_until<T>(
    max_attempts: u32,
    mut draw: impl FnMut() -> T,
    mut accept: impl FnMut(&T) -> bool,
) -> Sampled<T> {
    assert!(max_attempts > 0, "sample_until: max_attempts must be positive");
    for _ in 0..max_attempts - 1 {
        let candidate = draw();
        if accept(&candidate) {
            return Sampled {
                value: candidate,
                satisfied: true,
            };
        }
    }
    let last = draw();
    let satisfied = accept(&last);
    Sampled {
        value: last,
        satisfied,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_acceptable_draw_wins() {
        let mut counter = 0;
        let result = sample_until(100, || {
            counter += 1;
            counter
        }, |&v| v >= 3);
        assert_eq!(result.value, 3);
        assert!(result.satisfied);
        assert_eq!(counter, 3, "should stop drawing once accepted");
    }

    #[test]
    fn exhausted_budget_returns_last_draw_unsatisfied() {
        let mut counter = 0;
        let result = sample_until(10, || {
            counter += 1;
            counter
        }, |_| false);
        assert_eq!(result.value, 10, "fallback must be the last draw");
        assert!(!result.satisfied);
        assert_eq!(counter, 10, "must draw exactly max_attempts times");
    }

    #[test]
    fn last_draw_can_still_satisfy() {
        // The budget's final draw is checked against the predicate too.
        let mut counter = 0;
        let result = sample_until(5, || {
            counter += 1;
            counter
        }, |&v| v == 5);
        assert_eq!(result.value, 5);
        assert!(result.satisfied);
    }

    #[test]
    fn single_attempt_budget() {
        let result = sample_until(1, || 7, |&v| v > 100);
        assert_eq!(result.value, 7);
        assert!(!result.satisfied);
    }

    #[test]
    #[should_panic(expected = "max_attempts must be positive")]
    fn zero_attempts_panics() {
        sample_until(0, || 1, |_| true);
    }
}
