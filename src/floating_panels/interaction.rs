use std::rc::Rc;

use egui::{Pos2, Rect, Vec2};

use super::events::PanelEvent;
use super::geometry::clamp_pos_to_viewport;
use super::panel::{PanelAction, PanelHit, PanelId};
use super::resize::{ResizeDirection, bounds_within_viewport, resize_rect};
use super::LayoutManager;

/// Host hook for listeners that must only be attached while a gesture is active
/// (e.g. document-level pointer-move/pointer-up handlers).
///
/// One instance is shared by every panel of a [`LayoutManager`]. `capture` and `release` are
/// always called in pairs.
pub trait PointerCapture {
    fn capture(&self);
    fn release(&self);
}

/// Holds the pointer capture for the lifetime of one gesture; releases it on drop.
struct CaptureGuard {
    capture: Rc<dyn PointerCapture>,
}

impl CaptureGuard {
    fn acquire(capture: &Rc<dyn PointerCapture>) -> Self {
        capture.capture();
        Self {
            capture: Rc::clone(capture),
        }
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        self.capture.release();
    }
}

/// A drag or resize in progress. No gesture means idle.
#[derive(Clone, Debug, PartialEq)]
pub enum Gesture {
    Dragging {
        panel: PanelId,
        /// Pointer position relative to the panel's top-left corner at pointer-down.
        drag_offset: Vec2,
    },
    Resizing {
        panel: PanelId,
        direction: ResizeDirection,
        start_rect: Rect,
        pointer_start: Pos2,
    },
}

impl Gesture {
    pub fn panel(&self) -> &PanelId {
        match self {
            Self::Dragging { panel, .. } | Self::Resizing { panel, .. } => panel,
        }
    }
}

pub(super) struct ActiveGesture {
    gesture: Gesture,
    _capture: Option<CaptureGuard>,
}

/// What a pointer-down did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointerDown {
    /// No panel under the pointer.
    Missed,

    /// A gesture is already active; the press was ignored.
    Busy,

    /// The panel was raised, nothing else (body press, or chrome of an expanded panel).
    Raised(PanelId),

    DragStarted(PanelId),
    ResizeStarted(PanelId, ResizeDirection),
    Action(PanelId, PanelAction),
}

impl<Pane> LayoutManager<Pane> {
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref().map(|active| &active.gesture)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture(), Some(Gesture::Dragging { .. }))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self.gesture(), Some(Gesture::Resizing { .. }))
    }

    /// Topmost panel under `pointer` and what part of it was hit.
    pub fn hit_test(&self, pointer: Pos2) -> Option<(PanelId, PanelHit)> {
        self.draw_order().into_iter().rev().find_map(|id| {
            let rect = self.effective_rect(id)?;
            let hit = self.options.chrome.hit_test(rect, pointer, self.is_expanded(id))?;
            Some((id.clone(), hit))
        })
    }

    /// Press the primary pointer button at `pointer` (viewport coordinates).
    pub fn pointer_down(&mut self, pointer: Pos2) -> PointerDown {
        if let Some(active) = self.gesture() {
            log::trace!("pointer down ignored: {active:?} still active");
            return PointerDown::Busy;
        }

        let Some((id, hit)) = self.hit_test(pointer) else {
            return PointerDown::Missed;
        };

        let serial = self.allocate_raise_serial();
        let Some(panel) = self.panel_mut(&id) else {
            return PointerDown::Missed;
        };
        panel.raised_at = serial;
        let rect = panel.rect();
        let expanded = self.is_expanded(&id);

        match hit {
            PanelHit::Action(action) => {
                self.trigger_action(&id, action);
                PointerDown::Action(id, action)
            }
            PanelHit::Header if !expanded => {
                self.begin_gesture(Gesture::Dragging {
                    panel: id.clone(),
                    drag_offset: pointer - rect.min,
                });
                PointerDown::DragStarted(id)
            }
            PanelHit::ResizeHandle(direction) if !expanded => {
                self.begin_gesture(Gesture::Resizing {
                    panel: id.clone(),
                    direction,
                    start_rect: rect,
                    pointer_start: pointer,
                });
                PointerDown::ResizeStarted(id, direction)
            }
            PanelHit::Header | PanelHit::ResizeHandle(_) | PanelHit::Body => {
                PointerDown::Raised(id)
            }
        }
    }

    /// Advance the active gesture to `pointer`.
    ///
    /// Returns `true` if geometry changed. Unchanged geometry queues no event.
    pub fn pointer_move(&mut self, pointer: Pos2) -> bool {
        let Some(gesture) = self.gesture().cloned() else {
            return false;
        };
        let viewport = self.viewport;
        let Some(panel) = self.panel(gesture.panel()) else {
            self.end_gesture("panel vanished");
            return false;
        };
        let (old_position, old_size) = (panel.position, panel.size);

        let (id, position, size) = match gesture {
            Gesture::Dragging { panel: id, drag_offset } => {
                let position = clamp_pos_to_viewport(pointer - drag_offset, old_size, viewport);
                (id, position, old_size)
            }
            Gesture::Resizing {
                panel: id,
                direction,
                start_rect,
                pointer_start,
            } => {
                let bounds = bounds_within_viewport(start_rect, direction, panel.bounds, viewport);
                let rect = resize_rect(start_rect, pointer - pointer_start, direction, &bounds);
                (id, rect.min, rect.size())
            }
        };

        let moved = position != old_position;
        let resized = size != old_size;
        if moved {
            self.commit(PanelEvent::Moved {
                id: id.clone(),
                position,
            });
        }
        if resized {
            self.commit(PanelEvent::Resized { id, size });
        }
        moved || resized
    }

    /// Release the pointer. Ends any gesture; the last committed geometry stays.
    pub fn pointer_up(&mut self) {
        self.end_gesture("pointer up");
    }

    /// The platform cancelled the pointer stream. Same as [`Self::pointer_up`].
    pub fn pointer_cancel(&mut self) {
        self.end_gesture("pointer cancel");
    }

    /// Run a header action as if its button was pressed, queueing the resulting events.
    ///
    /// Returns `false` if no panel has `id` or the action does not apply (compressing a panel
    /// that is not expanded).
    pub fn trigger_action(&mut self, id: &PanelId, action: PanelAction) -> bool {
        if !self.contains(id) {
            return false;
        }
        match action {
            PanelAction::Close => {
                self.commit(PanelEvent::Closed { id: id.clone() });
            }
            PanelAction::Expand => {
                if self.is_expanded(id) {
                    return false;
                }
                if let Some(previous) = self.expanded.clone() {
                    self.commit(PanelEvent::Compressed { id: previous });
                }
                self.commit(PanelEvent::Expanded { id: id.clone() });
            }
            PanelAction::Compress => {
                if !self.is_expanded(id) {
                    return false;
                }
                self.commit(PanelEvent::Compressed { id: id.clone() });
            }
        }
        true
    }

    /// Apply an interaction event to the collection, then queue it for the host.
    fn commit(&mut self, event: PanelEvent) {
        match &event {
            PanelEvent::Moved { id, position } => {
                if let Some(panel) = self.panel_mut(id) {
                    panel.position = *position;
                }
            }
            PanelEvent::Resized { id, size } => {
                if let Some(panel) = self.panel_mut(id) {
                    panel.size = *size;
                }
            }
            PanelEvent::Closed { id } => {
                if let Err(err) = self.remove_panel(id) {
                    log::warn!("close: {err}");
                    return;
                }
            }
            PanelEvent::Expanded { id } => {
                self.expanded = Some(id.clone());
            }
            PanelEvent::Compressed { id } => {
                if self.expanded.as_ref() == Some(id) {
                    self.expanded = None;
                }
            }
        }
        self.events.push(event);
    }

    fn begin_gesture(&mut self, gesture: Gesture) {
        log::trace!("gesture start: {gesture:?}");
        let capture = self.pointer_capture.as_ref().map(CaptureGuard::acquire);
        self.gesture = Some(ActiveGesture {
            gesture,
            _capture: capture,
        });
    }

    pub(super) fn end_gesture(&mut self, reason: &'static str) {
        if let Some(active) = self.gesture.take() {
            log::trace!("gesture end ({reason}): {:?}", active.gesture);
        }
    }
}
