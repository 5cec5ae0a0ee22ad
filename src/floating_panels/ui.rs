use egui::{Align2, CursorIcon, FontId, Rect, Sense, StrokeKind, Ui, UiBuilder, Vec2};

use super::panel::{Panel, PanelAction, PanelHit, PanelId};
use super::{Gesture, LayoutManager};

/// Renders panel bodies for [`LayoutManager::ui`].
pub trait PanelBehavior<Pane> {
    fn panel_ui(&mut self, ui: &mut Ui, id: &PanelId, pane: &mut Pane);

    /// Header text. Defaults to the stored title.
    fn title(&mut self, panel: &Panel<Pane>) -> String {
        panel.title().to_owned()
    }
}

impl<Pane> LayoutManager<Pane> {
    /// Show all panels inside the available rect of `ui`.
    ///
    /// The available rect becomes the viewport. Pointer input is translated into
    /// [`Self::pointer_down`] / [`Self::pointer_move`] / [`Self::pointer_up`] in coordinates
    /// relative to that rect.
    pub fn ui(&mut self, ui: &mut Ui, behavior: &mut dyn PanelBehavior<Pane>) {
        let container = ui.available_rect_before_wrap();
        let origin = container.min.to_vec2();
        self.set_viewport(container.size());

        self.handle_pointer_input(ui, container);
        self.update_cursor(ui, container);

        let ids: Vec<PanelId> = self.draw_order().into_iter().cloned().collect();
        for id in ids {
            let Some(rect) = self.effective_rect(&id) else {
                continue;
            };
            self.panel_frame_ui(ui, behavior, &id, rect.translate(origin), container);
        }

        ui.advance_cursor_after_rect(container);

        if self.gesture().is_some() {
            ui.ctx().request_repaint();
        }
    }

    fn handle_pointer_input(&mut self, ui: &Ui, container: Rect) {
        let (latest, moved, pressed, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.delta() != Vec2::ZERO,
                i.pointer.primary_pressed(),
                i.pointer.any_released(),
            )
        });

        match latest {
            Some(pos) => {
                let local = (pos - container.min).to_pos2();
                if pressed && container.contains(pos) {
                    let outcome = self.pointer_down(local);
                    log::trace!("pointer down at {local:?}: {outcome:?}");
                } else if moved && self.gesture().is_some() {
                    self.pointer_move(local);
                }
            }
            None => {
                // Pointer left the window mid-gesture.
                if self.gesture().is_some() {
                    self.pointer_cancel();
                }
            }
        }

        if released {
            self.pointer_up();
        }
    }

    fn update_cursor(&self, ui: &Ui, container: Rect) {
        let icon = match self.gesture() {
            Some(Gesture::Dragging { .. }) => Some(CursorIcon::Grabbing),
            Some(Gesture::Resizing { direction, .. }) => Some(direction.cursor_icon()),
            None => ui
                .input(|i| i.pointer.hover_pos())
                .filter(|pos| container.contains(*pos))
                .and_then(|pos| self.hit_test((pos - container.min).to_pos2()))
                .and_then(|(id, hit)| match hit {
                    PanelHit::ResizeHandle(direction) if !self.is_expanded(&id) => {
                        Some(direction.cursor_icon())
                    }
                    PanelHit::Header if !self.is_expanded(&id) => Some(CursorIcon::Grab),
                    PanelHit::Action(_) => Some(CursorIcon::PointingHand),
                    PanelHit::Header | PanelHit::ResizeHandle(_) | PanelHit::Body => None,
                }),
        };
        if let Some(icon) = icon {
            ui.ctx().set_cursor_icon(icon);
        }
    }

    fn panel_frame_ui(
        &mut self,
        ui: &mut Ui,
        behavior: &mut dyn PanelBehavior<Pane>,
        id: &PanelId,
        rect: Rect,
        container: Rect,
    ) {
        let chrome = self.options.chrome;
        let expanded = self.is_expanded(id);
        let Some(panel) = self.panel_mut(id) else {
            return;
        };
        let title = behavior.title(panel);

        // Registered before the body so widgets of panels underneath stay unreachable.
        let _blocker = ui.interact(rect, ui.id().with(("floating_panel_frame", id.as_str())), Sense::click());

        let visuals = ui.visuals().clone();
        let painter = ui.painter().with_clip_rect(container);
        painter.rect_filled(rect, 6.0, visuals.window_fill());

        let header = chrome.header_rect(rect);
        painter.rect_filled(header, 6.0, visuals.faint_bg_color);
        painter.text(
            header.left_center() + egui::vec2(12.0, 0.0),
            Align2::LEFT_CENTER,
            title,
            FontId::proportional(14.0),
            visuals.strong_text_color(),
        );
        for (action, button) in chrome.action_rects(rect, expanded) {
            let glyph = match action {
                PanelAction::Close => "✕",
                PanelAction::Expand => "⛶",
                PanelAction::Compress => "🗗",
            };
            painter.text(
                button.center(),
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(14.0),
                visuals.text_color(),
            );
        }

        painter.rect_stroke(
            rect,
            6.0,
            visuals.widgets.noninteractive.bg_stroke,
            StrokeKind::Inside,
        );

        let body = Rect::from_min_max(header.left_bottom(), rect.right_bottom()).intersect(container);
        if body.is_positive() {
            let mut body_ui = ui.new_child(
                UiBuilder::new()
                    .id_salt(("floating_panel_body", id.as_str()))
                    .max_rect(body.shrink(4.0)),
            );
            body_ui.set_clip_rect(body);
            behavior.panel_ui(&mut body_ui, id, panel.content_mut());
        }
    }
}
