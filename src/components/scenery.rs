use bevy::prelude::*;
use nalgebra::Vector3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Runway,
    Bush,
    Building,
}

impl EntityKind {
    /// Bushes and buildings line the shoulders and share the prop wrap rule.
    pub fn is_prop(&self) -> bool {
        matches!(self, EntityKind::Bush | EntityKind::Building)
    }
}

/// One recycled piece of scenery. X and Y are fixed at creation; the
/// recycler only ever moves Z.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldEntity {
    /// Index of the entity in the scenery pool.
    pub id: usize,
    pub kind: EntityKind,
    pub position: Vector3<f64>,
}

impl WorldEntity {
    pub fn new(id: usize, kind: EntityKind, position: Vector3<f64>) -> Self {
        Self { id, kind, position }
    }

    pub fn transform(&self) -> EntityTransform {
        EntityTransform {
            id: self.id,
            position_x: self.position.x,
            position_y: self.position.y,
            position_z: self.position.z,
        }
    }
}

/// Entity placement pushed to the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityTransform {
    pub id: usize,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
}

impl EntityTransform {
    pub fn translation(&self) -> Vec3 {
        Vec3::new(
            self.position_x as f32,
            self.position_y as f32,
            self.position_z as f32,
        )
    }
}

/// Links a spawned mesh to its slot in the scenery pool.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneryTag {
    pub id: usize,
    pub kind: EntityKind,
}
