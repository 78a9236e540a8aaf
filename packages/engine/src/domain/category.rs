use serde::{Deserialize, Serialize};

/// Behavioural tag carried by every body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Normal,
    Sticky,
    Heavy,
    Bouncy,
}

pub const HEAVY_ELASTICITY: f64 = 0.2;
pub const BOUNCY_ELASTICITY: f64 = 1.2;
pub const STICKY_ELASTICITY: f64 = 0.0;

impl Category {
    /// Elasticity this category imposes, or `None` to use the world default.
    ///
    /// Checked in the order Heavy, Bouncy, Sticky.
    pub fn elasticity_override(self) -> Option<f64> {
        match self {
            Category::Heavy => Some(HEAVY_ELASTICITY),
            Category::Bouncy => Some(BOUNCY_ELASTICITY),
            Category::Sticky => Some(STICKY_ELASTICITY),
            Category::Normal => None,
        }
    }

    /// Elasticity for this step given the current default.
    #[inline]
    pub fn elasticity(self, default_elasticity: f64) -> f64 {
        self.elasticity_override().unwrap_or(default_elasticity)
    }

    /// Numeric id used by the flat render buffer.
    pub fn id(self) -> u8 {
        match self {
            Category::Normal => 0,
            Category::Sticky => 1,
            Category::Heavy => 2,
            Category::Bouncy => 3,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Category::Normal),
            1 => Some(Category::Sticky),
            2 => Some(Category::Heavy),
            3 => Some(Category::Bouncy),
            _ => None,
        }
    }
}
