/// Letter grade for a personal completion rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            Self::APlus
        } else if rate >= 80.0 {
            Self::A
        } else if rate >= 70.0 {
            Self::B
        } else if rate >= 60.0 {
            Self::C
        } else {
            Self::D
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Label for a team member's completion rate. Uses its own thresholds,
/// unrelated to [`Grade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamRating {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

impl TeamRating {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 80.0 {
            Self::Excellent
        } else if rate >= 60.0 {
            Self::Good
        } else if rate >= 40.0 {
            Self::Average
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}
