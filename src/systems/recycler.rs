use bevy::prelude::*;

use crate::components::{EntityKind, WorldEntity};
use crate::resources::RecycleConfig;

/// Moves every entity `config.speed` toward the camera and wraps the ones
/// that have passed it. Returns the number of entities wrapped this tick.
pub fn advance(entities: &mut [WorldEntity], config: &RecycleConfig) -> usize {
    entities
        .iter_mut()
        .map(|entity| advance_entity(entity, config))
        .filter(|wrapped| *wrapped)
        .count()
}

/// Returns true if the entity wrapped.
fn advance_entity(entity: &mut WorldEntity, config: &RecycleConfig) -> bool {
    entity.position.z += config.speed;

    match entity.kind {
        EntityKind::Runway if entity.position.z > config.runway_wrap_threshold => {
            entity.position.z = config.runway_reset_z;
            debug!("Runway {} reset to z={}", entity.id, entity.position.z);
            true
        }
        // A fixed shift keeps the spacing between props in the same row
        EntityKind::Bush | EntityKind::Building
            if entity.position.z > config.prop_wrap_threshold =>
        {
            entity.position.z -= config.prop_wrap_distance;
            true
        }
        _ => false,
    }
}
