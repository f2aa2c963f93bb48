//! Options for layout computation.

use nanograph_core::{Node, Rect};
#[cfg(feature = "serde")]
use nanograph_core::ConfigError;

/// Where the root of a recalculation is arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum RootPlacement {
    /// Use the rect the caller seeded. An unseeded root gets a zero-origin
    /// rect with its user rect's size.
    #[default]
    Seeded,
    /// Always use the root's user rect.
    UserRect,
    /// Zero origin with the measured size.
    Measured,
}

impl RootPlacement {
    /// Rect the root is arranged into. Call after the measure pass.
    pub fn resolve(self, root: &Node) -> Rect {
        match self {
            RootPlacement::Seeded => root
                .seed()
                .unwrap_or_else(|| Rect::from_size(root.user_rect.size())),
            RootPlacement::UserRect => root.user_rect,
            RootPlacement::Measured => Rect::from_size(root.calculated_size()),
        }
    }
}

/// Options for layout computation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LayoutOptions {
    /// How the root rect is chosen before arranging
    pub root_placement: RootPlacement,
    /// Round every arranged child rect to whole units
    pub pixel_snap: bool,
}

impl LayoutOptions {
    pub fn with_root_placement(mut self, placement: RootPlacement) -> Self {
        self.root_placement = placement;
        self
    }

    pub fn with_pixel_snap(mut self, snap: bool) -> Self {
        self.pixel_snap = snap;
        self
    }

    /// Load options from JSON. Missing fields keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }
}
