// Preference vector guiding how routes are scored

use crate::models::TransportMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Weights for time, cost and distance plus an optional preferred mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceVector {
    /// Profile label, carries no behaviour
    pub profile: String,

    pub time_weight: f64,
    pub cost_weight: f64,
    pub distance_weight: f64,

    /// `TransportMode::Any` means no preference
    pub preferred_mode: TransportMode,
}

impl PreferenceVector {
    /// Creates a preference vector without a preferred mode
    pub fn new<S: Into<String>>(
        profile: S,
        time_weight: f64,
        cost_weight: f64,
        distance_weight: f64,
    ) -> Self {
        Self {
            profile: profile.into(),
            time_weight,
            cost_weight,
            distance_weight,
            preferred_mode: TransportMode::Any,
        }
    }

    /// User supplied weights; negatives are clamped to zero before normalizing
    pub fn custom(time_weight: f64, cost_weight: f64, distance_weight: f64) -> Self {
        let clamp = |w: f64| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let mut prefs = Self::new(
            "custom",
            clamp(time_weight),
            clamp(cost_weight),
            clamp(distance_weight),
        );
        prefs.normalize();
        prefs
    }

    pub fn with_mode(mut self, mode: TransportMode) -> Self {
        self.preferred_mode = mode;
        self
    }

    /// Preferred mode, `None` for the wildcard
    pub fn preferred_mode(&self) -> Option<TransportMode> {
        if self.preferred_mode.is_wildcard() {
            None
        } else {
            Some(self.preferred_mode)
        }
    }

    /// Scales the weights so they sum to one; a zero sum is left untouched
    pub fn normalize(&mut self) {
        let total = self.time_weight + self.cost_weight + self.distance_weight;
        if total > 0.0 {
            self.time_weight /= total;
            self.cost_weight /= total;
            self.distance_weight /= total;
        }
    }
}

impl Default for PreferenceVector {
    fn default() -> Self {
        Self::new("fastest", 1.0, 0.0, 0.0)
    }
}

impl fmt::Display for PreferenceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (time {:.2}, cost {:.2}, distance {:.2}, mode {})",
            self.profile,
            self.time_weight,
            self.cost_weight,
            self.distance_weight,
            self.preferred_mode
        )
    }
}
