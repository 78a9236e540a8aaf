//! RigidBodySystem - the per-step pipeline over all bodies
//!
//! Order per step:
//! 1. force policy
//! 2. elasticity from category
//! 3. semi-implicit Euler integration
//! 4. momentum decay (when enabled)
//! 5. pairwise collision resolution, exhaustive, in index order
//! 6. arena containment

mod boundary;
mod collision;
mod integrate;
mod system;

pub use boundary::Arena;
pub use collision::ContactStats;
pub use system::{arena_of, RigidBodySystem, StepCounters};
