//! Progress figures a page derives from the fundraising block.

use serde::{Deserialize, Serialize};

use super::model::Fundraising;

/// How a fractional percentage is turned into the whole number shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Halves round up: 32.5 becomes 33.
    #[default]
    Nearest,
    /// Always round down: 32.5 becomes 32.
    Floor,
}

impl RoundingPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "nearest" => Some(Self::Nearest),
            "floor" => Some(Self::Floor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nearest => "nearest",
            Self::Floor => "floor",
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match self {
            Self::Nearest => value.round(),
            Self::Floor => value.floor(),
        }
    }
}

impl Fundraising {
    /// raised / goal, or `None` when there is no positive goal to measure against.
    pub fn progress_ratio(&self) -> Option<f64> {
        if !self.goal.is_finite() || self.goal <= 0.0 || !self.raised.is_finite() {
            return None;
        }
        Some(self.raised.max(0.0) / self.goal)
    }

    /// Whole-number percentage, capped at 100.
    pub fn progress_percent(&self, policy: RoundingPolicy) -> Option<u32> {
        self.progress_ratio()?;
        // Scale before dividing so 650/2000 lands on exactly 32.5.
        let exact = self.raised.max(0.0) * 100.0 / self.goal;
        let percent = policy.apply(exact).clamp(0.0, 100.0);
        Some(percent as u32)
    }

    pub fn progress_label(&self, policy: RoundingPolicy) -> Option<String> {
        self.progress_percent(policy)
            .map(|percent| format!("{percent}%"))
    }

    /// Amount still needed to reach the goal; zero once it is met.
    pub fn remaining(&self) -> f64 {
        (self.goal - self.raised).max(0.0)
    }
}
