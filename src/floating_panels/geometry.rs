use egui::{Pos2, Rect, Vec2};

/// Inclusive `[min, max]` bounds for a panel size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SizeBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for SizeBounds {
    fn default() -> Self {
        Self {
            min: Vec2::new(200.0, 150.0),
            max: Vec2::INFINITY,
        }
    }
}

impl SizeBounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Clamp each axis independently. `min` wins if the bounds are inverted.
    pub fn clamp(&self, size: Vec2) -> Vec2 {
        clamp_size(size, self.min, self.max)
    }

    pub fn contains(&self, size: Vec2) -> bool {
        self.min.x <= size.x && size.x <= self.max.x && self.min.y <= size.y && size.y <= self.max.y
    }
}

/// Keep a panel of `size` inside `[0, viewport - size]` on both axes.
///
/// When the panel is larger than the viewport on an axis, that axis collapses to `0`.
pub fn clamp_pos_to_viewport(pos: Pos2, size: Vec2, viewport: Vec2) -> Pos2 {
    let max = viewport - size;
    egui::pos2(clamp_axis(pos.x, 0.0, max.x), clamp_axis(pos.y, 0.0, max.y))
}

pub fn clamp_size(size: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    egui::vec2(clamp_axis(size.x, min.x, max.x), clamp_axis(size.y, min.y, max.y))
}

// Unlike `f32::clamp` this never panics: the lower bound wins when `lo > hi`.
fn clamp_axis(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// The rect an expanded panel is presented at: the viewport inset by `outer_margin`.
pub fn expanded_rect(viewport: Vec2, outer_margin: f32) -> Rect {
    Rect::from_min_size(Pos2::ZERO, viewport).shrink(outer_margin)
}
