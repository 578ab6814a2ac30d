//! Milestone annotation for the life calendar.
//!
//! Milestones sit at fixed absolute week numbers, except "Today" which
//! follows the weeks-lived boundary and therefore moves with the age input.

use shared::{Milestone, MilestoneVisibility, WeekCell, WEEKS_PER_YEAR};

/// Separator used when a single week carries more than one milestone
pub const LABEL_SEPARATOR: &str = ", ";

/// Week number (1-based) at which a milestone falls
pub fn milestone_week(milestone: Milestone, weeks_lived: u32) -> u32 {
    match milestone {
        Milestone::Birth => 1,
        Milestone::EighteenthBirthday => 18 * WEEKS_PER_YEAR,
        Milestone::Graduation => 22 * WEEKS_PER_YEAR,
        Milestone::Today => weeks_lived,
    }
}

/// Milestones falling on `week_number`, in declaration order, filtered by
/// visibility. Returns `None` when nothing matches.
pub fn annotate(
    week_number: u32,
    weeks_lived: u32,
    visibility: &MilestoneVisibility,
) -> Option<Vec<&'static str>> {
    let labels: Vec<&'static str> = Milestone::ALL
        .iter()
        .filter(|m| visibility.is_visible(**m))
        .filter(|m| milestone_week(**m, weeks_lived) == week_number)
        .map(|m| m.label())
        .collect();

    if labels.is_empty() {
        None
    } else {
        Some(labels)
    }
}

/// Attach milestone labels to every cell of a freshly computed grid.
/// Existing labels are replaced so the grid reflects only `visibility`.
pub fn annotate_grid(cells: &mut [WeekCell], weeks_lived: u32, visibility: &MilestoneVisibility) {
    for cell in cells.iter_mut() {
        cell.milestone_label = annotate(cell.week_number, weeks_lived, visibility)
            .map(|labels| labels.join(LABEL_SEPARATOR));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::week_grid;

    #[test]
    fn test_fixed_offsets() {
        assert_eq!(milestone_week(Milestone::Birth, 0), 1);
        assert_eq!(milestone_week(Milestone::EighteenthBirthday, 0), 936);
        assert_eq!(milestone_week(Milestone::Graduation, 0), 1144);
        assert_eq!(milestone_week(Milestone::Today, 1560), 1560);
    }

    #[test]
    fn test_no_match_returns_none() {
        assert_eq!(annotate(2, 100, &MilestoneVisibility::default()), None);
    }

    #[test]
    fn test_visibility_filters_labels() {
        let all = MilestoneVisibility::default();
        assert_eq!(annotate(936, 0, &all), Some(vec!["18th Birthday"]));

        let hidden = MilestoneVisibility { eighteen: false, ..all };
        assert_eq!(annotate(936, 0, &hidden), None);
    }

    #[test]
    fn test_labels_keep_declaration_order() {
        // Age 18 puts "Today" on the same week as the 18th birthday
        let labels = annotate(936, 936, &MilestoneVisibility::default());
        assert_eq!(labels, Some(vec!["18th Birthday", "Today"]));

        let labels = annotate(1, 1, &MilestoneVisibility::default());
        assert_eq!(labels, Some(vec!["Birth", "Today"]));
    }

    #[test]
    fn test_today_absent_at_age_zero() {
        let visibility = MilestoneVisibility::default();
        let mut grid = week_grid::compute(0, 1);
        annotate_grid(&mut grid, 0, &visibility);

        let labelled: Vec<_> = grid.iter().filter(|c| c.has_milestone()).collect();
        assert_eq!(labelled.len(), 1);
        assert_eq!(labelled[0].milestone_label.as_deref(), Some("Birth"));
    }

    #[test]
    fn test_eighteenth_birthday_on_grid() {
        let age = 18;
        let lived = week_grid::weeks_lived(age);
        assert_eq!(lived, 936);

        let mut grid = week_grid::compute(age, 90);
        annotate_grid(&mut grid, lived, &MilestoneVisibility::default());
        let label = grid[935].milestone_label.clone().unwrap_or_default();
        assert!(label.contains("18th Birthday"));
        assert_eq!(label, "18th Birthday, Today");

        let off = MilestoneVisibility { eighteen: false, ..Default::default() };
        annotate_grid(&mut grid, lived, &off);
        let label = grid[935].milestone_label.clone().unwrap_or_default();
        assert!(!label.contains("18th Birthday"));
        assert_eq!(label, "Today");
    }

    #[test]
    fn test_reannotation_clears_stale_labels() {
        let mut grid = week_grid::compute(30, 90);
        annotate_grid(&mut grid, 1560, &MilestoneVisibility::default());
        assert!(grid[1559].has_milestone());

        annotate_grid(&mut grid, 1560, &MilestoneVisibility::none());
        assert!(grid.iter().all(|c| !c.has_milestone()));
    }
}
