// Copyright 2026 hesabla developers

//! The arithmetic under measurement: a recursive factorial and the
//! accumulation loop that calls it once per iteration.

use std::hint::black_box;

/// The factorial argument. Always 15; 15! = 1,307,674,368,000.
pub const FACTORIAL_INPUT: u64 = 15;

/// How many times the accumulation loop runs in a real benchmark run.
pub const ITERATIONS: u64 = 5_000_000;

/// n! as a recursive function.
///
/// The parameter is unsigned, so the original script's nonterminating
/// recursion on negative input is unrepresentable here.
pub fn factorial(n: u64) -> u128 {
    if n <= 1 {
        1
    } else {
        u128::from(n) * factorial(n - 1)
    }
}

/// Sum of (15! + i) for i in 1..=iterations.
///
/// The factorial call stays inside the loop: recomputing the invariant value
/// five million times is the only work the benchmark measures. `black_box`
/// keeps the optimizer from hoisting or const-folding the call.
pub fn accumulate(iterations: u64) -> u128 {
    let mut total: u128 = 0;
    for i in 1..=iterations {
        total += factorial(black_box(FACTORIAL_INPUT)) + u128::from(i);
    }
    total
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    /// What `accumulate(n)` must equal, by the closed form:
    /// n * 15! + n * (n + 1) / 2.
    fn closed_form(n: u64) -> u128 {
        let n = u128::from(n);
        n * 1_307_674_368_000 + n * (n + 1) / 2
    }

    #[test]
    fn factorial_base_cases() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
    }

    #[test]
    fn factorial_of_fifteen_is_exact() {
        assert_eq!(factorial(FACTORIAL_INPUT), 1_307_674_368_000);
    }

    #[test]
    fn small_accumulation_by_hand() {
        // (15! + 1) + (15! + 2) + (15! + 3)
        assert_eq!(accumulate(3), 3 * 1_307_674_368_000 + 6);
    }

    #[test]
    fn accumulate_zero_iterations_is_zero() {
        assert_eq!(accumulate(0), 0);
    }

    #[test]
    fn loop_matches_closed_form_for_small_counts() {
        for n in [1, 2, 10, 100, 1_000] {
            assert_eq!(accumulate(n), closed_form(n), "n={n}");
        }
    }

    #[test]
    fn each_iteration_strictly_increases_the_total() {
        let mut previous = 0;
        for k in 1..=50 {
            let total = accumulate(k);
            assert!(total > previous, "total did not increase at k={k}");
            previous = total;
        }
    }

    #[test]
    fn fencepost_step_is_one_factorial_plus_the_index() {
        // An off-by-one in the loop bounds changes the sum by exactly
        // 15! plus the boundary index.
        for n in [1, 2, 499, 5_000] {
            assert_eq!(
                accumulate(n) - accumulate(n - 1),
                1_307_674_368_000 + u128::from(n)
            );
        }
    }

    #[test]
    fn production_iteration_count_total() {
        assert_eq!(accumulate(ITERATIONS), 6_538_384_340_002_500_000);
    }

    #[test]
    fn production_total_matches_closed_form() {
        assert_eq!(closed_form(ITERATIONS), 6_538_384_340_002_500_000);
    }
}
