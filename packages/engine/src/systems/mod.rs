//! Physics systems: bodies, force policies and the step pipeline.

pub mod forces;
pub mod rigid_body;
pub mod rigid_body_system;
