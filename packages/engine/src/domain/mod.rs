//! Domain data: categories, tunables, update payloads and scenarios.

pub mod category;
pub mod config;
pub mod patch;
pub mod scenario;

pub use category::Category;
pub use config::{ForceMode, SimConfig};
pub use patch::BodyPatch;
pub use scenario::Scenario;
