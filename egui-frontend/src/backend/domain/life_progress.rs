//! # Life Progress
//!
//! Summary figures shown alongside the grid: how much of the expected
//! lifespan has been lived as a percentage, and the accessible sentences
//! describing the grid and each of its cells.

use shared::WeekCell;

/// Percentage view of a life, as shown by the progress bar under the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LifeProgress {
    /// Share of the expected lifespan already lived, 0.0 to 100.0 and above
    /// when the age passes the lifespan
    pub percentage_lived: f32,
}

impl LifeProgress {
    pub fn new(age: u32, lifespan: u32) -> Self {
        let percentage_lived = if lifespan == 0 {
            0.0
        } else {
            age as f32 / lifespan as f32 * 100.0
        };
        Self { percentage_lived }
    }

    /// Remaining share, never below zero
    pub fn percentage_remaining(&self) -> f32 {
        (100.0 - self.percentage_lived).max(0.0)
    }

    /// Fill fraction for a progress bar (0.0 to 1.0)
    pub fn bar_fraction(&self) -> f32 {
        (self.percentage_lived / 100.0).clamp(0.0, 1.0)
    }

    pub fn headline(&self) -> String {
        format!("You've completed {:.1}% of your life.", self.percentage_lived)
    }

    pub fn remaining_text(&self) -> String {
        format!("{:.1}% Remaining", self.percentage_remaining())
    }
}

/// Accessible summary of the whole grid
pub fn grid_summary(weeks_lived: u32, total_weeks: u32) -> String {
    format!(
        "Life calendar grid, {} weeks lived, {} weeks remaining.",
        weeks_lived,
        total_weeks.saturating_sub(weeks_lived)
    )
}

/// Accessible description of a single cell: week number, status, and any
/// milestone labels
pub fn cell_description(cell: &WeekCell) -> String {
    let mut description = format!(
        "Week {}, {}",
        cell.week_number,
        if cell.is_lived { "Lived" } else { "Remaining" }
    );
    if cell.is_beyond_lifespan {
        description.push_str(", beyond expected lifespan");
    }
    if let Some(label) = &cell.milestone_label {
        description.push_str(": ");
        description.push_str(label);
    }
    description
}
