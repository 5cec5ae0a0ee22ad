use std::rc::Rc;

use egui::{Pos2, Rect, Vec2};

mod arrange;
mod error;
mod events;
mod geometry;
mod interaction;
mod options;
mod panel;
mod resize;
mod ui;

#[cfg(test)]
mod manager_tests;

pub use arrange::{arrange, auto_arrange, grid_dimensions};
pub use error::PanelError;
pub use events::PanelEvent;
pub use geometry::{SizeBounds, clamp_pos_to_viewport, clamp_size, expanded_rect};
pub use interaction::{Gesture, PointerCapture, PointerDown};
pub use options::{LayoutMode, LayoutOptions};
pub use panel::{Panel, PanelAction, PanelChrome, PanelDescriptor, PanelHit, PanelId};
pub use resize::{
    HorizontalEdge, ResizeDirection, VerticalEdge, bounds_within_viewport, resize_rect,
};
pub use ui::PanelBehavior;

use interaction::ActiveGesture;

/// Owns an ordered collection of floating panels and everything that moves them.
///
/// - Panels keep insertion order; arrangements assign slots in that order.
/// - At most one drag or resize gesture is active at a time, across all panels.
/// - At most one panel is expanded at a time.
/// - User interaction is reported through [`Self::drain_events`]; host calls return their result.
pub struct LayoutManager<Pane> {
    pub options: LayoutOptions,

    panels: Vec<Panel<Pane>>,
    ids: ahash::HashSet<PanelId>,

    viewport: Vec2,
    mode: LayoutMode,
    expanded: Option<PanelId>,

    gesture: Option<ActiveGesture>,
    pointer_capture: Option<Rc<dyn PointerCapture>>,

    events: Vec<PanelEvent>,
    next_raise_serial: u64,
}

impl<Pane> std::fmt::Debug for LayoutManager<Pane> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutManager")
            .field("options", &self.options)
            .field("panels", &self.panels.iter().map(|p| (&p.id, p.rect())).collect::<Vec<_>>())
            .field("viewport", &self.viewport)
            .field("mode", &self.mode)
            .field("expanded", &self.expanded)
            .field("gesture", &self.gesture())
            .finish_non_exhaustive()
    }
}

impl<Pane> LayoutManager<Pane> {
    pub fn new(viewport: Vec2) -> Self {
        Self::new_with_options(viewport, LayoutOptions::default())
    }

    pub fn new_with_options(viewport: Vec2, options: LayoutOptions) -> Self {
        Self {
            options,
            panels: Vec::new(),
            ids: Default::default(),
            viewport,
            mode: LayoutMode::Auto,
            expanded: None,
            gesture: None,
            pointer_capture: None,
            events: Vec::new(),
            next_raise_serial: 1,
        }
    }

    /// Install the hook that attaches global pointer listeners while a gesture is active.
    ///
    /// Takes effect from the next gesture on.
    pub fn set_pointer_capture(&mut self, capture: Rc<dyn PointerCapture>) {
        self.pointer_capture = Some(capture);
    }

    // ------------------------------------------------------------------------
    // Collection

    /// Insert a panel at the end of the collection.
    ///
    /// The initial size is clamped to the panel's bounds and the position to the viewport. In
    /// [`LayoutMode::Auto`] all panels are re-arranged afterwards.
    ///
    /// # Errors
    /// [`PanelError::DuplicateId`] if the id is taken; nothing is inserted.
    pub fn add_panel(&mut self, descriptor: PanelDescriptor<Pane>) -> Result<(), PanelError> {
        let PanelDescriptor {
            id,
            title,
            content,
            position,
            size,
            bounds,
            z_index,
        } = descriptor;

        if self.ids.contains(&id) {
            return Err(PanelError::DuplicateId(id));
        }

        let bounds = bounds.unwrap_or(self.options.default_bounds);
        let raised_at = self.allocate_raise_serial();
        log::debug!("add panel {id:?} ({} total)", self.panels.len() + 1);

        let size = bounds.clamp(size);
        self.ids.insert(id.clone());
        self.panels.push(Panel {
            id,
            title,
            content,
            position: clamp_pos_to_viewport(position, size, self.viewport),
            size,
            bounds,
            z_index: z_index.unwrap_or(self.options.default_z_index),
            raised_at,
        });

        self.on_count_changed();
        Ok(())
    }

    /// Remove a panel and hand back its record.
    ///
    /// Clears the expanded panel and ends the active gesture if either belonged to it.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn remove_panel(&mut self, id: &PanelId) -> Result<Panel<Pane>, PanelError> {
        let index = self.index_of(id)?;
        let panel = self.panels.remove(index);
        self.ids.remove(id);
        log::debug!("remove panel {id:?} ({} left)", self.panels.len());

        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        }
        if self.gesture().is_some_and(|g| g.panel() == id) {
            self.end_gesture("panel removed");
        }

        self.on_count_changed();
        Ok(panel)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn contains(&self, id: &PanelId) -> bool {
        self.ids.contains(id)
    }

    /// Panels in insertion order.
    pub fn panels(&self) -> impl Iterator<Item = &Panel<Pane>> {
        self.panels.iter()
    }

    pub fn panel(&self, id: &PanelId) -> Option<&Panel<Pane>> {
        self.panels.iter().find(|p| &p.id == id)
    }

    pub fn content_mut(&mut self, id: &PanelId) -> Option<&mut Pane> {
        self.panel_mut(id).map(|p| &mut p.content)
    }

    /// Panels back to front: by `z_index`, ties broken by most recent interaction.
    pub fn draw_order(&self) -> Vec<&PanelId> {
        let mut order: Vec<&Panel<Pane>> = self.panels.iter().collect();
        order.sort_by_key(|p| p.stacking_key());
        order.into_iter().map(|p| &p.id).collect()
    }

    /// Raise `id` above every panel sharing its `z_index`.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn bring_to_front(&mut self, id: &PanelId) -> Result<(), PanelError> {
        let serial = self.allocate_raise_serial();
        let index = self.index_of(id)?;
        self.panels[index].raised_at = serial;
        Ok(())
    }

    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn set_z_index(&mut self, id: &PanelId, z_index: i32) -> Result<(), PanelError> {
        let index = self.index_of(id)?;
        self.panels[index].z_index = z_index;
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Geometry commands

    /// Move a panel, clamped so it stays inside the viewport. Returns the committed position.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn move_panel(&mut self, id: &PanelId, position: Pos2) -> Result<Pos2, PanelError> {
        let viewport = self.viewport;
        let panel = self.panel_mut(id).ok_or_else(|| PanelError::NotFound(id.clone()))?;
        panel.position = clamp_pos_to_viewport(position, panel.size, viewport);
        Ok(panel.position)
    }

    /// Resize a panel around its top-left corner, clamped to its bounds. Returns the committed size.
    ///
    /// The position is then pulled back so the panel stays inside the viewport.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn resize_panel(&mut self, id: &PanelId, size: Vec2) -> Result<Vec2, PanelError> {
        let viewport = self.viewport;
        let panel = self.panel_mut(id).ok_or_else(|| PanelError::NotFound(id.clone()))?;
        panel.size = panel.bounds.clamp(size);
        panel.position = clamp_pos_to_viewport(panel.position, panel.size, viewport);
        Ok(panel.size)
    }

    /// Replace a panel's size bounds and re-clamp its current size and position.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn set_bounds(&mut self, id: &PanelId, bounds: SizeBounds) -> Result<Vec2, PanelError> {
        let viewport = self.viewport;
        let panel = self.panel_mut(id).ok_or_else(|| PanelError::NotFound(id.clone()))?;
        panel.bounds = bounds;
        panel.size = bounds.clamp(panel.size);
        panel.position = clamp_pos_to_viewport(panel.position, panel.size, viewport);
        Ok(panel.size)
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Record the host viewport size. Does not re-arrange; call [`Self::relayout`] for that.
    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// The rect a panel is presented at: its own geometry, or the expanded rect.
    pub fn effective_rect(&self, id: &PanelId) -> Option<Rect> {
        let panel = self.panel(id)?;
        if self.is_expanded(id) {
            Some(expanded_rect(self.viewport, self.options.outer_margin))
        } else {
            Some(panel.rect())
        }
    }

    // ------------------------------------------------------------------------
    // Expansion

    pub fn expanded_panel_id(&self) -> Option<&PanelId> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, id: &PanelId) -> bool {
        self.expanded.as_ref() == Some(id)
    }

    /// Expand `id`, implicitly compressing the previously expanded panel.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn expand(&mut self, id: &PanelId) -> Result<(), PanelError> {
        self.index_of(id)?;
        if let Some(previous) = self.expanded.replace(id.clone()) {
            if &previous != id {
                log::debug!("expand {id:?} compresses {previous:?}");
            }
        }
        Ok(())
    }

    /// Compress `id` if it is the expanded panel; otherwise nothing changes.
    ///
    /// # Errors
    /// [`PanelError::NotFound`] if no panel has `id`.
    pub fn compress(&mut self, id: &PanelId) -> Result<(), PanelError> {
        self.index_of(id)?;
        if self.expanded.as_ref() == Some(id) {
            self.expanded = None;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Arrangement

    pub fn layout_mode(&self) -> LayoutMode {
        self.mode
    }

    /// Select a layout mode and apply its arrangement once.
    pub fn set_layout_mode(&mut self, mode: LayoutMode) {
        if self.mode != mode {
            log::debug!("layout mode {:?} -> {mode:?}", self.mode);
        }
        self.mode = mode;
        self.relayout();
    }

    /// Re-apply the current mode's arrangement, e.g. after the host viewport changed.
    pub fn relayout(&mut self) {
        let rects = arrange(self.mode, self.viewport, self.panels.len(), &self.options);
        if arrange::has_degenerate_extent(&rects) {
            log::warn!(
                "{:?} arrangement of {} panels in {:?} has non-positive extents",
                self.mode,
                self.panels.len(),
                self.viewport
            );
        }
        for (panel, rect) in self.panels.iter_mut().zip(rects) {
            panel.position = rect.min;
            panel.size = panel.bounds.clamp(rect.size());
        }
    }

    fn on_count_changed(&mut self) {
        if self.mode == LayoutMode::Auto && !self.panels.is_empty() {
            self.relayout();
        }
    }

    // ------------------------------------------------------------------------
    // Events

    /// Take every event queued since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<PanelEvent> {
        std::mem::take(&mut self.events)
    }

    // ------------------------------------------------------------------------

    fn index_of(&self, id: &PanelId) -> Result<usize, PanelError> {
        self.panels
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| PanelError::NotFound(id.clone()))
    }

    fn panel_mut(&mut self, id: &PanelId) -> Option<&mut Panel<Pane>> {
        self.panels.iter_mut().find(|p| &p.id == id)
    }

    fn allocate_raise_serial(&mut self) -> u64 {
        let serial = self.next_raise_serial;
        self.next_raise_serial = serial.saturating_add(1);
        serial
    }
}
