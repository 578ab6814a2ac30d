//! Week grid domain logic for the life calendar.
//!
//! Turns an age and an expected lifespan into the ordered list of week cells
//! that the grid renders. The computation is pure: the same inputs always
//! produce the same grid, so the UI simply recomputes everything whenever a
//! parameter changes.

use shared::{WeekCell, WEEKS_PER_YEAR};

/// Weeks lived for a given age in whole years
pub fn weeks_lived(age: u32) -> u32 {
    age.saturating_mul(WEEKS_PER_YEAR)
}

/// Weeks in an expected lifespan of whole years
pub fn total_weeks(lifespan: u32) -> u32 {
    lifespan.saturating_mul(WEEKS_PER_YEAR)
}

/// Compute the full week grid.
///
/// The grid is long enough to hold both the expected lifespan and every
/// week already lived. When the age exceeds the lifespan the overrun weeks
/// are kept and flagged `is_beyond_lifespan` instead of being hidden.
///
/// Milestone labels are left empty; see `milestones::annotate_grid`.
pub fn compute(age: u32, lifespan: u32) -> Vec<WeekCell> {
    let lived = weeks_lived(age);
    let total = total_weeks(lifespan);
    let display_length = total.max(lived);

    if display_length == 0 {
        return Vec::new();
    }

    (0..display_length)
        .map(|i| WeekCell {
            week_number: i + 1,
            is_lived: i < lived,
            is_beyond_lifespan: i >= total,
            milestone_label: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_when_nothing_to_show() {
        assert!(compute(0, 0).is_empty());
    }

    #[test]
    fn test_grid_length_is_max_of_lived_and_total() {
        for (age, lifespan) in [(0, 1), (1, 0), (25, 90), (90, 25), (150, 150), (3, 7)] {
            let grid = compute(age, lifespan);
            let expected = (lifespan * 52).max(age * 52) as usize;
            assert_eq!(grid.len(), expected, "age {} lifespan {}", age, lifespan);
        }
    }

    #[test]
    fn test_cell_flags_follow_boundaries() {
        let age = 7;
        let lifespan = 5;
        let grid = compute(age, lifespan);

        for (i, cell) in grid.iter().enumerate() {
            assert_eq!(cell.week_number as usize, i + 1);
            assert_eq!(cell.is_lived, i < (age * 52) as usize);
            assert_eq!(cell.is_beyond_lifespan, i >= (lifespan * 52) as usize);
            assert!(cell.milestone_label.is_none());
        }
    }

    #[test]
    fn test_typical_life_scenario() {
        let grid = compute(30, 90);

        assert_eq!(weeks_lived(30), 1560);
        assert_eq!(total_weeks(90), 4680);
        assert_eq!(grid.len(), 4680);
        assert!(grid[1559].is_lived);
        assert!(!grid[1560].is_lived);
        assert!(!grid[4679].is_beyond_lifespan);
    }

    #[test]
    fn test_age_past_lifespan_keeps_overrun_weeks() {
        let grid = compute(95, 90);

        assert_eq!(grid.len(), 4940);
        assert!(!grid[4679].is_beyond_lifespan);
        for cell in &grid[4680..4940] {
            assert!(cell.is_beyond_lifespan);
            assert!(cell.is_lived);
        }
    }

    #[test]
    fn test_compute_is_deterministic() {
        assert_eq!(compute(42, 80), compute(42, 80));
    }

    #[test]
    fn test_lived_only_grid() {
        let grid = compute(1, 0);
        assert_eq!(grid.len(), 52);
        assert!(grid.iter().all(|c| c.is_lived && c.is_beyond_lifespan));
    }
}
