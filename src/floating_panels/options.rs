use egui::Vec2;

use super::geometry::SizeBounds;
use super::panel::PanelChrome;

/// Options for [`super::LayoutManager`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct LayoutOptions {
    /// Space between the viewport border and the arranged panels, in points.
    pub outer_margin: f32,

    /// Space between neighbouring grid cells, in points.
    pub gutter: f32,

    /// Size of a lone panel; it is centered in the viewport.
    pub single_panel_size: Vec2,

    /// Size bounds for panels added without their own.
    ///
    /// The maximum defaults to unbounded so split arrangements can fill tall viewports.
    pub default_bounds: SizeBounds,

    /// Stacking order for panels added without their own.
    pub default_z_index: i32,

    pub chrome: PanelChrome,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            outer_margin: 20.0,
            gutter: 10.0,
            single_panel_size: Vec2::new(600.0, 400.0),
            default_bounds: SizeBounds::default(),
            default_z_index: 1000,
            chrome: PanelChrome::default(),
        }
    }
}

/// How [`super::LayoutManager`] arranges its panels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum LayoutMode {
    /// Pick an arrangement from the panel count, and re-arrange whenever the count changes.
    #[default]
    Auto,

    /// Two side-by-side columns.
    TwoSplit,

    /// Two panels on top, one full-width panel below.
    ThreeSplit,

    /// Full-width rows stacked top to bottom.
    Vertical,
}

impl LayoutMode {
    pub const ALL: [Self; 4] = [Self::Auto, Self::TwoSplit, Self::ThreeSplit, Self::Vertical];

    /// Panel count the mode is designed for, if it has one.
    pub fn natural_count(self) -> Option<usize> {
        match self {
            Self::TwoSplit => Some(2),
            Self::ThreeSplit => Some(3),
            Self::Auto | Self::Vertical => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::TwoSplit => "2-split",
            Self::ThreeSplit => "3-split",
            Self::Vertical => "Vertical",
        }
    }
}
