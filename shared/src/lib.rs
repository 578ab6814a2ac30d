use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of weeks counted per year of life. A year is treated as exactly
/// 52 weeks so that every year occupies one full row of a wide grid.
pub const WEEKS_PER_YEAR: u32 = 52;

/// One unit of the life calendar grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCell {
    /// 1-based week number (index in the grid + 1)
    pub week_number: u32,
    /// Whether this week lies before the current age
    pub is_lived: bool,
    /// Whether this week lies at or past the expected lifespan
    pub is_beyond_lifespan: bool,
    /// Milestone labels for this week, joined in declaration order
    pub milestone_label: Option<String>,
}

impl WeekCell {
    /// Zero-based position of this cell in the grid
    pub fn index(&self) -> usize {
        self.week_number.saturating_sub(1) as usize
    }

    pub fn has_milestone(&self) -> bool {
        self.milestone_label.is_some()
    }
}

/// Grid orientation, controlling how many weeks go on each row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// One year per row (52 columns)
    #[default]
    Wide,
    /// Half a year per row (26 columns), better for portrait screens and phones
    Tall,
}

impl AspectRatio {
    /// Number of week cells per grid row
    pub fn columns(&self) -> u32 {
        match self {
            AspectRatio::Wide => WEEKS_PER_YEAR,
            AspectRatio::Tall => WEEKS_PER_YEAR / 2,
        }
    }

    pub fn all() -> [AspectRatio; 2] {
        [AspectRatio::Wide, AspectRatio::Tall]
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AspectRatio::Wide => write!(f, "Wide"),
            AspectRatio::Tall => write!(f, "Tall"),
        }
    }
}

/// Fixed life events that can be highlighted on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Milestone {
    Birth,
    EighteenthBirthday,
    Graduation,
    Today,
}

impl Milestone {
    /// All milestones in declaration order. Labels for a single week are
    /// always listed in this order.
    pub const ALL: [Milestone; 4] = [
        Milestone::Birth,
        Milestone::EighteenthBirthday,
        Milestone::Graduation,
        Milestone::Today,
    ];

    /// Human-readable label shown on the grid and in accessible descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Milestone::Birth => "Birth",
            Milestone::EighteenthBirthday => "18th Birthday",
            Milestone::Graduation => "Graduation",
            Milestone::Today => "Today",
        }
    }
}

impl fmt::Display for Milestone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Independent on/off switches for each milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneVisibility {
    pub birth: bool,
    pub eighteen: bool,
    pub graduation: bool,
    pub today: bool,
}

impl MilestoneVisibility {
    /// Every milestone switched off
    pub fn none() -> Self {
        Self {
            birth: false,
            eighteen: false,
            graduation: false,
            today: false,
        }
    }

    pub fn is_visible(&self, milestone: Milestone) -> bool {
        match milestone {
            Milestone::Birth => self.birth,
            Milestone::EighteenthBirthday => self.eighteen,
            Milestone::Graduation => self.graduation,
            Milestone::Today => self.today,
        }
    }

    /// Mutable access to the flag backing a milestone (used by the checkboxes)
    pub fn flag_mut(&mut self, milestone: Milestone) -> &mut bool {
        match milestone {
            Milestone::Birth => &mut self.birth,
            Milestone::EighteenthBirthday => &mut self.eighteen,
            Milestone::Graduation => &mut self.graduation,
            Milestone::Today => &mut self.today,
        }
    }
}

impl Default for MilestoneVisibility {
    fn default() -> Self {
        Self {
            birth: true,
            eighteen: true,
            graduation: true,
            today: true,
        }
    }
}

/// Everything the user controls about the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeParameters {
    /// Current age in whole years
    pub age: u32,
    /// Expected lifespan in whole years
    pub lifespan: u32,
    pub aspect_ratio: AspectRatio,
    pub milestones: MilestoneVisibility,
}

impl LifeParameters {
    /// Weeks already lived (`age * 52`)
    pub fn weeks_lived(&self) -> u32 {
        self.age.saturating_mul(WEEKS_PER_YEAR)
    }

    /// Weeks in the expected lifespan (`lifespan * 52`)
    pub fn total_weeks(&self) -> u32 {
        self.lifespan.saturating_mul(WEEKS_PER_YEAR)
    }
}

impl Default for LifeParameters {
    fn default() -> Self {
        Self {
            age: 25,
            lifespan: 90,
            aspect_ratio: AspectRatio::default(),
            milestones: MilestoneVisibility::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_columns() {
        assert_eq!(AspectRatio::Wide.columns(), 52);
        assert_eq!(AspectRatio::Tall.columns(), 26);
    }

    #[test]
    fn test_week_cell_index() {
        let cell = WeekCell {
            week_number: 1,
            is_lived: true,
            is_beyond_lifespan: false,
            milestone_label: None,
        };
        assert_eq!(cell.index(), 0);
        assert!(!cell.has_milestone());
    }

    #[test]
    fn test_milestone_flags() {
        let mut visibility = MilestoneVisibility::none();
        assert!(Milestone::ALL.iter().all(|m| !visibility.is_visible(*m)));

        *visibility.flag_mut(Milestone::Graduation) = true;
        assert!(visibility.is_visible(Milestone::Graduation));
        assert!(!visibility.is_visible(Milestone::Today));
    }

    #[test]
    fn test_parameters_derived_weeks() {
        let params = LifeParameters { age: 30, lifespan: 90, ..Default::default() };
        assert_eq!(params.weeks_lived(), 1560);
        assert_eq!(params.total_weeks(), 4680);
    }
}
