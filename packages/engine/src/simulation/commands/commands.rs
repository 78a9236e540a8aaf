use crate::core::EngineResult;
use crate::domain::BodyPatch;

use super::WorldCore;

/// What an upsert did. An out-of-range index is not an error: it appends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Updated(usize),
    Appended(usize),
}

impl UpsertOutcome {
    pub fn index(self) -> usize {
        match self {
            UpsertOutcome::Updated(i) | UpsertOutcome::Appended(i) => i,
        }
    }
}

pub(super) fn upsert(world: &mut WorldCore, index: Option<usize>, patch: &BodyPatch) -> UpsertOutcome {
    if let Some(i) = index {
        if let Some(body) = world.rigid_bodies.body_mut(i) {
            patch.apply_to(body);
            return UpsertOutcome::Updated(i);
        }
    }

    if let Some(mass) = patch.mass {
        if mass < 0.0 {
            log::warn!("spawning body with negative mass {}", mass);
        }
    }

    let body = patch.to_body(world.config.default_elasticity);
    let new_index = world.rigid_bodies.add_body(body);
    log::debug!("appended body {} (requested index {:?})", new_index, index);
    UpsertOutcome::Appended(new_index)
}

pub(super) fn upsert_json(
    world: &mut WorldCore,
    index: Option<usize>,
    json: &str,
) -> EngineResult<UpsertOutcome> {
    let patch: BodyPatch = serde_json::from_str(json)?;
    Ok(upsert(world, index, &patch))
}

pub(super) fn reset(world: &mut WorldCore) {
    let default_elasticity = world.config.default_elasticity;
    let bodies = world
        .initial
        .iter()
        .map(|b| {
            let mut body = b.clone();
            body.clear_motion();
            body.elasticity = default_elasticity;
            body
        })
        .collect();

    world.rigid_bodies.replace_all(bodies);
    log::debug!("reset to {} initial bodies", world.initial.len());
}
