use egui::{CursorIcon, Rect, Vec2};

use super::geometry::SizeBounds;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum VerticalEdge {
    Top,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum HorizontalEdge {
    Left,
    Right,
}

/// Which edges a resize gesture moves.
///
/// Edge handles move one axis, corner handles move both. At least one axis is always set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct ResizeDirection {
    vertical: Option<VerticalEdge>,
    horizontal: Option<HorizontalEdge>,
}

impl ResizeDirection {
    pub const TOP: Self = Self::edges(Some(VerticalEdge::Top), None);
    pub const BOTTOM: Self = Self::edges(Some(VerticalEdge::Bottom), None);
    pub const LEFT: Self = Self::edges(None, Some(HorizontalEdge::Left));
    pub const RIGHT: Self = Self::edges(None, Some(HorizontalEdge::Right));
    pub const TOP_LEFT: Self = Self::edges(Some(VerticalEdge::Top), Some(HorizontalEdge::Left));
    pub const TOP_RIGHT: Self = Self::edges(Some(VerticalEdge::Top), Some(HorizontalEdge::Right));
    pub const BOTTOM_LEFT: Self =
        Self::edges(Some(VerticalEdge::Bottom), Some(HorizontalEdge::Left));
    pub const BOTTOM_RIGHT: Self =
        Self::edges(Some(VerticalEdge::Bottom), Some(HorizontalEdge::Right));

    pub const ALL: [Self; 8] = [
        Self::TOP,
        Self::BOTTOM,
        Self::LEFT,
        Self::RIGHT,
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
    ];

    const fn edges(vertical: Option<VerticalEdge>, horizontal: Option<HorizontalEdge>) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Returns `None` for the all-none combination, which is not a resize.
    pub fn new(vertical: Option<VerticalEdge>, horizontal: Option<HorizontalEdge>) -> Option<Self> {
        (vertical.is_some() || horizontal.is_some()).then_some(Self::edges(vertical, horizontal))
    }

    pub fn vertical(self) -> Option<VerticalEdge> {
        self.vertical
    }

    pub fn horizontal(self) -> Option<HorizontalEdge> {
        self.horizontal
    }

    pub fn is_corner(self) -> bool {
        self.vertical.is_some() && self.horizontal.is_some()
    }

    pub fn cursor_icon(self) -> CursorIcon {
        match (self.vertical, self.horizontal) {
            (Some(VerticalEdge::Top), None) => CursorIcon::ResizeNorth,
            (Some(VerticalEdge::Bottom), None) => CursorIcon::ResizeSouth,
            (None, Some(HorizontalEdge::Left)) => CursorIcon::ResizeWest,
            (None, Some(HorizontalEdge::Right)) => CursorIcon::ResizeEast,
            (Some(VerticalEdge::Top), Some(HorizontalEdge::Left)) => CursorIcon::ResizeNorthWest,
            (Some(VerticalEdge::Top), Some(HorizontalEdge::Right)) => CursorIcon::ResizeNorthEast,
            (Some(VerticalEdge::Bottom), Some(HorizontalEdge::Left)) => {
                CursorIcon::ResizeSouthWest
            }
            (Some(VerticalEdge::Bottom), Some(HorizontalEdge::Right)) => {
                CursorIcon::ResizeSouthEast
            }
            (None, None) => CursorIcon::Default,
        }
    }
}

/// Resize `start` by the total pointer travel since the gesture began.
///
/// Width and height are clamped to `bounds` independently. For `Top`/`Left` the position is
/// derived from the clamped extent so the opposite edge stays where it was at gesture start.
pub fn resize_rect(
    start: Rect,
    pointer_delta: Vec2,
    direction: ResizeDirection,
    bounds: &SizeBounds,
) -> Rect {
    let mut width = start.width();
    let mut height = start.height();

    match direction.horizontal {
        Some(HorizontalEdge::Right) => width += pointer_delta.x,
        Some(HorizontalEdge::Left) => width -= pointer_delta.x,
        None => {}
    }
    match direction.vertical {
        Some(VerticalEdge::Bottom) => height += pointer_delta.y,
        Some(VerticalEdge::Top) => height -= pointer_delta.y,
        None => {}
    }

    let size = bounds.clamp(egui::vec2(width, height));

    let x = match direction.horizontal {
        Some(HorizontalEdge::Left) => start.max.x - size.x,
        _ => start.min.x,
    };
    let y = match direction.vertical {
        Some(VerticalEdge::Top) => start.max.y - size.y,
        _ => start.min.y,
    };

    Rect::from_min_size(egui::pos2(x, y), size)
}

/// Tighten `bounds.max` so the edges `direction` moves cannot leave `[0, viewport]`.
///
/// A limit never drops below the extent at gesture start, so starting a resize does not shrink
/// a panel that already overhangs the viewport.
pub fn bounds_within_viewport(
    start: Rect,
    direction: ResizeDirection,
    bounds: SizeBounds,
    viewport: Vec2,
) -> SizeBounds {
    let width_limit = match direction.horizontal {
        Some(HorizontalEdge::Left) => start.max.x,
        Some(HorizontalEdge::Right) => viewport.x - start.min.x,
        None => f32::INFINITY,
    };
    let height_limit = match direction.vertical {
        Some(VerticalEdge::Top) => start.max.y,
        Some(VerticalEdge::Bottom) => viewport.y - start.min.y,
        None => f32::INFINITY,
    };
    let limit = egui::vec2(width_limit.max(start.width()), height_limit.max(start.height()));
    SizeBounds::new(bounds.min, bounds.max.min(limit))
}
