use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{EntityKind, WorldEntity};
use crate::utils::{GliderError, Result};

/// Startup placement of the runway and the shoulder props.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneryLayout {
    /// Number of bush rows along each shoulder.
    pub rows: usize,
    /// Z distance between consecutive rows.
    pub row_spacing: f64,
    /// Z of row 0.
    pub first_row_z: f64,
    pub runway_half_width: f64,
    /// Gap between the runway edge and the bush line.
    pub bush_distance: f64,
    /// Additional gap between the bush line and the buildings.
    pub building_offset: f64,
    /// A building pair stands on every row divisible by this, except row 0.
    pub building_every: usize,
    pub bush_height: f64,
    pub building_height: f64,
    pub runway_height: f64,
    pub runway_start_z: f64,
}

impl Default for SceneryLayout {
    fn default() -> Self {
        Self {
            rows: 30,
            row_spacing: 30.0,
            first_row_z: -400.0,
            runway_half_width: 6.0,
            bush_distance: 15.0,
            building_offset: 20.0,
            building_every: 5,
            bush_height: 1.0,
            building_height: 4.0,
            runway_height: 0.01,
            runway_start_z: -200.0,
        }
    }
}

impl SceneryLayout {
    /// Builds the scenery pool. The runway is always id 0, followed row by
    /// row by the left and right bush and, on building rows, the left and
    /// right building.
    pub fn build(&self) -> Vec<WorldEntity> {
        let mut entities = Vec::with_capacity(1 + self.rows * 4);
        let mut push = |kind: EntityKind, position: Vector3<f64>| {
            let id = entities.len();
            entities.push(WorldEntity::new(id, kind, position));
        };

        push(
            EntityKind::Runway,
            Vector3::new(0.0, self.runway_height, self.runway_start_z),
        );

        let bush_x = self.runway_half_width + self.bush_distance;
        let building_x = bush_x + self.building_offset;

        for row in 0..self.rows {
            let z = self.first_row_z + row as f64 * self.row_spacing;

            push(EntityKind::Bush, Vector3::new(-bush_x, self.bush_height, z));
            push(EntityKind::Bush, Vector3::new(bush_x, self.bush_height, z));

            if self.is_building_row(row) {
                push(
                    EntityKind::Building,
                    Vector3::new(-building_x, self.building_height, z),
                );
                push(
                    EntityKind::Building,
                    Vector3::new(building_x, self.building_height, z),
                );
            }
        }

        entities
    }

    pub fn is_building_row(&self, row: usize) -> bool {
        self.building_every > 0 && row > 0 && row % self.building_every == 0
    }

    pub fn validate(&self) -> Result<()> {
        let values = [
            self.row_spacing,
            self.first_row_z,
            self.runway_half_width,
            self.bush_distance,
            self.building_offset,
            self.bush_height,
            self.building_height,
            self.runway_height,
            self.runway_start_z,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GliderError::InvalidConfig(
                "scenery layout values must be finite".to_string(),
            ));
        }
        if self.row_spacing <= 0.0 {
            return Err(GliderError::InvalidConfig(format!(
                "scenery.row_spacing must be positive, got {}",
                self.row_spacing
            )));
        }
        Ok(())
    }
}

/// Forward motion and wrap rules of the world recycler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecycleConfig {
    /// Distance every entity moves toward the camera per tick.
    pub speed: f64,
    /// The runway resets once its z passes this value.
    pub runway_wrap_threshold: f64,
    pub runway_reset_z: f64,
    /// Props wrap once their z passes this value.
    pub prop_wrap_threshold: f64,
    /// Distance a wrapping prop is moved back ahead of the camera.
    pub prop_wrap_distance: f64,
}

impl Default for RecycleConfig {
    fn default() -> Self {
        Self {
            speed: 1.25,
            runway_wrap_threshold: 200.0,
            runway_reset_z: -200.0,
            prop_wrap_threshold: 20.0,
            prop_wrap_distance: 450.0,
        }
    }
}

impl RecycleConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(GliderError::InvalidConfig(format!(
                "recycle.speed must be a finite non-negative number, got {}",
                self.speed
            )));
        }
        if !(self.runway_reset_z.is_finite()
            && self.runway_wrap_threshold.is_finite()
            && self.runway_reset_z < self.runway_wrap_threshold)
        {
            return Err(GliderError::InvalidConfig(
                "recycle.runway_reset_z must be finite and below runway_wrap_threshold"
                    .to_string(),
            ));
        }
        if !self.prop_wrap_threshold.is_finite()
            || !self.prop_wrap_distance.is_finite()
            || self.prop_wrap_distance <= self.speed
        {
            return Err(GliderError::InvalidConfig(format!(
                "recycle.prop_wrap_distance must be finite and larger than speed, got {}",
                self.prop_wrap_distance
            )));
        }
        Ok(())
    }
}
