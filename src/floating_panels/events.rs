use egui::{Pos2, Vec2};

use super::panel::PanelId;

/// A committed state change, queued for the host by [`super::LayoutManager::drain_events`].
///
/// Drags and resizes report every pointer-move tick, not only the final geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PanelEvent {
    Moved { id: PanelId, position: Pos2 },
    Resized { id: PanelId, size: Vec2 },
    Closed { id: PanelId },
    Expanded { id: PanelId },
    Compressed { id: PanelId },
}

impl PanelEvent {
    pub fn panel_id(&self) -> &PanelId {
        match self {
            Self::Moved { id, .. }
            | Self::Resized { id, .. }
            | Self::Closed { id }
            | Self::Expanded { id }
            | Self::Compressed { id } => id,
        }
    }
}
