//! Floating, draggable and resizable panels for egui, with automatic arrangement.
//!
//! A [`LayoutManager`] owns an ordered collection of panels. Panels are moved and resized by the
//! user through their header and edge handles, or programmatically by the host. Whenever the
//! panel count changes in [`LayoutMode::Auto`], every panel is re-arranged to fit the viewport.
//!
//! ```
//! use egui_floating_panels::{LayoutManager, PanelDescriptor, PanelId};
//!
//! let mut manager = LayoutManager::new(egui::vec2(1000.0, 800.0));
//! manager.add_panel(PanelDescriptor::new("resume", "Resume", ())).unwrap();
//! manager.add_panel(PanelDescriptor::new("evaluation", "Evaluation", ())).unwrap();
//!
//! let evaluation = manager.panel(&PanelId::from("evaluation")).unwrap();
//! assert_eq!(evaluation.position(), egui::pos2(500.0, 20.0));
//! ```

#![forbid(unsafe_code)]

pub mod floating_panels;

pub use floating_panels::{
    Gesture, LayoutManager, LayoutMode, LayoutOptions, Panel, PanelAction, PanelBehavior,
    PanelChrome, PanelDescriptor, PanelError, PanelEvent, PanelHit, PanelId, PointerCapture,
    PointerDown, ResizeDirection, SizeBounds,
};
