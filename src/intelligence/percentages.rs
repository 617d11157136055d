// ABOUTME: Shared percentage normalizer used by macro breakdowns and meal tables
// ABOUTME: Rounds shares of a whole to integers that always sum to exactly 100
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_nutrition_core::constants::percent;

/// Express `parts` as integer percentages of `whole` that sum to exactly 100.
///
/// Each part is rounded independently. When the rounded values do not sum to 100, the
/// last part absorbs the difference; it never goes below zero, and any excess it cannot
/// absorb is taken from the preceding parts, last first. Earlier parts are authoritative.
///
/// Returns all zeros when `whole` is not positive or every part rounds to zero.
#[must_use]
pub fn normalize_percentages(parts: &[f64], whole: f64) -> Vec<u8> {
    let mut rounded: Vec<i32> = parts
        .iter()
        .map(|part| rounded_percent(*part, whole))
        .collect();
    reconcile(&mut rounded);
    rounded.into_iter().map(to_percent).collect()
}

/// Fixed-size form of [`normalize_percentages`]
#[must_use]
pub fn normalize_percentage_array<const N: usize>(parts: [f64; N], whole: f64) -> [u8; N] {
    let mut rounded = parts.map(|part| rounded_percent(part, whole));
    reconcile(&mut rounded);
    rounded.map(to_percent)
}

fn rounded_percent(part: f64, whole: f64) -> i32 {
    if !(whole.is_finite() && whole > 0.0) || !part.is_finite() || part <= 0.0 {
        return 0;
    }
    (part / whole * percent::WHOLE)
        .round()
        .clamp(0.0, percent::WHOLE) as i32
}

fn reconcile(rounded: &mut [i32]) {
    let sum: i32 = rounded.iter().sum();
    if sum > 0 && sum != percent::WHOLE_INT {
        absorb_remainder(rounded);
    }
}

fn absorb_remainder(rounded: &mut [i32]) {
    let Some((last, rest)) = rounded.split_last_mut() else {
        return;
    };
    let others: i32 = rest.iter().sum();
    *last = percent::WHOLE_INT - others;

    let mut excess = -*last;
    if excess <= 0 {
        return;
    }
    *last = 0;
    for value in rest.iter_mut().rev() {
        let taken = excess.min(*value);
        *value -= taken;
        excess -= taken;
        if excess == 0 {
            break;
        }
    }
}

fn to_percent(value: i32) -> u8 {
    u8::try_from(value.clamp(0, percent::WHOLE_INT)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_split_is_unchanged() {
        assert_eq!(
            normalize_percentages(&[700.0, 700.0, 600.0], 2000.0),
            vec![35, 35, 30]
        );
    }

    #[test]
    fn test_last_part_absorbs_rounding() {
        // 33.3 / 33.3 / 33.3 rounds to 99 in total
        assert_eq!(
            normalize_percentages(&[1.0, 1.0, 1.0], 3.0),
            vec![33, 33, 34]
        );
    }

    #[test]
    fn test_overshoot_with_empty_last_part_stays_at_hundred() {
        // 87.5% and 12.5% both round up, the last part is zero
        let result = normalize_percentages(&[7.0, 1.0, 0.0], 8.0);
        assert_eq!(result, vec![88, 12, 0]);
    }

    #[test]
    fn test_non_positive_whole_yields_zeros() {
        assert_eq!(normalize_percentages(&[1.0, 2.0], 0.0), vec![0, 0]);
    }

    #[test]
    fn test_array_form_matches_slice_form() {
        let parts = [540.0, 996.0, 664.0];
        assert_eq!(normalize_percentage_array(parts, 2200.0), [25, 45, 30]);
        assert_eq!(
            normalize_percentage_array([7.0, 1.0, 0.0], 8.0).to_vec(),
            normalize_percentages(&[7.0, 1.0, 0.0], 8.0)
        );
        assert_eq!(normalize_percentage_array([1.0, 2.0], -1.0), [0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_percentages(&[], 100.0).is_empty());
    }
}
