use serde::{Deserialize, Serialize};

use crate::utils::{GliderError, Result};

/// Per-tick rates and limits of the flight control model. Angles are in
/// degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    pub roll_rate: f64,
    pub roll_limit: f64,
    pub yaw_rate: f64,
    pub yaw_limit: f64,
    /// Roll added per tick while a rudder key is held, same sign as the
    /// opposite-direction aileron.
    pub rudder_roll_coupling: f64,
    /// Lateral drift per degree of yaw per tick.
    pub yaw_drift: f64,
    /// Lateral drift per degree of bank per tick, opposite to roll sign.
    pub bank_drift: f64,
    pub pitch_rate: f64,
    pub pitch_limit: f64,
    /// Multiplier applied to pitch each tick without elevator input.
    pub pitch_decay: f64,
    pub lateral_limit: f64,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            roll_rate: 1.0,
            roll_limit: 30.0,
            yaw_rate: 0.8,
            yaw_limit: 45.0,
            rudder_roll_coupling: 0.65,
            yaw_drift: 0.015,
            bank_drift: 0.01,
            pitch_rate: 0.5,
            pitch_limit: 15.0,
            pitch_decay: 0.95,
            lateral_limit: 20.0,
        }
    }
}

impl ControlConfig {
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("roll_rate", self.roll_rate),
            ("yaw_rate", self.yaw_rate),
            ("rudder_roll_coupling", self.rudder_roll_coupling),
            ("yaw_drift", self.yaw_drift),
            ("bank_drift", self.bank_drift),
            ("pitch_rate", self.pitch_rate),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(GliderError::InvalidConfig(format!(
                    "control.{name} must be a finite non-negative number, got {value}"
                )));
            }
        }

        let limits = [
            ("roll_limit", self.roll_limit),
            ("yaw_limit", self.yaw_limit),
            ("pitch_limit", self.pitch_limit),
            ("lateral_limit", self.lateral_limit),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(GliderError::InvalidConfig(format!(
                    "control.{name} must be a finite positive number, got {value}"
                )));
            }
        }

        if !(0.0..=1.0).contains(&self.pitch_decay) {
            return Err(GliderError::InvalidConfig(format!(
                "control.pitch_decay must lie in [0, 1], got {}",
                self.pitch_decay
            )));
        }

        Ok(())
    }
}
