use egui::{Pos2, Rect, Vec2};

use super::geometry::SizeBounds;
use super::resize::{HorizontalEdge, ResizeDirection, VerticalEdge};

/// Caller-assigned panel identifier, unique within one [`super::LayoutManager`].
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelId(String);

impl PanelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PanelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PanelId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PanelId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Everything the host supplies when adding a panel.
///
/// `bounds` and `z_index` fall back to [`super::LayoutOptions`] when `None`.
#[derive(Clone, Debug)]
pub struct PanelDescriptor<Pane> {
    pub id: PanelId,
    pub title: String,
    pub content: Pane,
    pub position: Pos2,
    pub size: Vec2,
    pub bounds: Option<SizeBounds>,
    pub z_index: Option<i32>,
}

impl<Pane> PanelDescriptor<Pane> {
    pub fn new(id: impl Into<PanelId>, title: impl Into<String>, content: Pane) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content,
            position: Pos2::ZERO,
            size: Vec2::new(400.0, 300.0),
            bounds: None,
            z_index: None,
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Pos2) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: SizeBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }
}

/// A floating panel owned by a [`super::LayoutManager`].
///
/// Geometry is only mutated through the manager, so the size always satisfies `bounds`.
#[derive(Debug)]
pub struct Panel<Pane> {
    pub(super) id: PanelId,
    pub(super) title: String,
    pub(super) content: Pane,
    pub(super) position: Pos2,
    pub(super) size: Vec2,
    pub(super) bounds: SizeBounds,
    pub(super) z_index: i32,
    /// Bumped every time the panel is interacted with; breaks `z_index` ties.
    pub(super) raised_at: u64,
}

impl<Pane> Panel<Pane> {
    pub fn id(&self) -> &PanelId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &Pane {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Pane {
        &mut self.content
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    pub fn bounds(&self) -> SizeBounds {
        self.bounds
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub(super) fn stacking_key(&self) -> (i32, u64) {
        (self.z_index, self.raised_at)
    }

    pub fn into_content(self) -> Pane {
        self.content
    }
}

/// Buttons in the panel header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum PanelAction {
    Close,
    Expand,
    Compress,
}

/// Chrome metrics used for hit testing and painting, in points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct PanelChrome {
    pub header_height: f32,

    /// Thickness of the edge resize handles, measured inwards from the panel border.
    pub handle_thickness: f32,

    /// Side length of the square corner resize handles.
    pub corner_size: f32,

    /// Side length of the square header buttons.
    pub action_button_size: f32,
}

impl Default for PanelChrome {
    fn default() -> Self {
        Self {
            header_height: 48.0,
            handle_thickness: 6.0,
            corner_size: 16.0,
            action_button_size: 28.0,
        }
    }
}

/// What a pointer position lands on inside one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelHit {
    ResizeHandle(ResizeDirection),
    Action(PanelAction),
    Header,
    Body,
}

impl PanelChrome {
    pub fn header_rect(&self, rect: Rect) -> Rect {
        Rect::from_min_size(rect.min, egui::vec2(rect.width(), self.header_height.min(rect.height())))
    }

    /// Header buttons, laid out right-to-left: close, then the expand/compress toggle.
    pub fn action_rects(&self, rect: Rect, expanded: bool) -> [(PanelAction, Rect); 2] {
        let header = self.header_rect(rect);
        let side = self.action_button_size;
        let top = header.center().y - side / 2.0;
        let pad = (header.height() - side).max(0.0) / 2.0;

        let close = Rect::from_min_size(egui::pos2(header.max.x - pad - side, top), Vec2::splat(side));
        let toggle = close.translate(egui::vec2(-side, 0.0));
        let toggle_action = if expanded {
            PanelAction::Compress
        } else {
            PanelAction::Expand
        };
        [(PanelAction::Close, close), (toggle_action, toggle)]
    }

    /// Which resize handle, if any, `pointer` lands on. Corners win over edges.
    pub fn resize_handle_at(&self, rect: Rect, pointer: Pos2) -> Option<ResizeDirection> {
        if !rect.contains(pointer) {
            return None;
        }

        let near = |distance: f32, reach: f32| distance <= reach;

        let corner_vertical = if near(pointer.y - rect.min.y, self.corner_size) {
            Some(VerticalEdge::Top)
        } else if near(rect.max.y - pointer.y, self.corner_size) {
            Some(VerticalEdge::Bottom)
        } else {
            None
        };
        let corner_horizontal = if near(pointer.x - rect.min.x, self.corner_size) {
            Some(HorizontalEdge::Left)
        } else if near(rect.max.x - pointer.x, self.corner_size) {
            Some(HorizontalEdge::Right)
        } else {
            None
        };
        if corner_vertical.is_some() && corner_horizontal.is_some() {
            return ResizeDirection::new(corner_vertical, corner_horizontal);
        }

        let vertical = if near(pointer.y - rect.min.y, self.handle_thickness) {
            Some(VerticalEdge::Top)
        } else if near(rect.max.y - pointer.y, self.handle_thickness) {
            Some(VerticalEdge::Bottom)
        } else {
            None
        };
        let horizontal = if near(pointer.x - rect.min.x, self.handle_thickness) {
            Some(HorizontalEdge::Left)
        } else if near(rect.max.x - pointer.x, self.handle_thickness) {
            Some(HorizontalEdge::Right)
        } else {
            None
        };
        ResizeDirection::new(vertical, horizontal)
    }

    /// Classify `pointer` against a panel presented at `rect`.
    ///
    /// Precedence: resize handle, header button, header, body. `None` if outside the panel.
    pub fn hit_test(&self, rect: Rect, pointer: Pos2, expanded: bool) -> Option<PanelHit> {
        if !rect.contains(pointer) {
            return None;
        }
        if let Some(direction) = self.resize_handle_at(rect, pointer) {
            return Some(PanelHit::ResizeHandle(direction));
        }
        if let Some((action, _)) = self
            .action_rects(rect, expanded)
            .into_iter()
            .find(|(_, r)| r.contains(pointer))
        {
            return Some(PanelHit::Action(action));
        }
        if self.header_rect(rect).contains(pointer) {
            return Some(PanelHit::Header);
        }
        Some(PanelHit::Body)
    }
}
