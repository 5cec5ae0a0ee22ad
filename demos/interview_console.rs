#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui;
use egui_floating_panels::{
    LayoutManager, LayoutMode, PanelBehavior, PanelDescriptor, PanelEvent, PanelId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pane {
    Resume,
    Evaluation,
    Notes,
    Transcript,
    Scratch(u32),
}

impl Pane {
    fn id(self) -> PanelId {
        match self {
            Self::Resume => "resume".into(),
            Self::Evaluation => "evaluation".into(),
            Self::Notes => "notes".into(),
            Self::Transcript => "transcript".into(),
            Self::Scratch(n) => PanelId::new(format!("scratch-{n}")),
        }
    }

    fn title(self) -> String {
        match self {
            Self::Resume => "Resume".to_owned(),
            Self::Evaluation => "Evaluation".to_owned(),
            Self::Notes => "Notes".to_owned(),
            Self::Transcript => "Transcript".to_owned(),
            Self::Scratch(n) => format!("Scratch {n}"),
        }
    }
}

#[derive(Default)]
struct Behavior;

impl PanelBehavior<Pane> for Behavior {
    fn panel_ui(&mut self, ui: &mut egui::Ui, _id: &PanelId, pane: &mut Pane) {
        match pane {
            Pane::Resume => {
                ui.heading("Candidate");
                ui.label("Five years of systems programming.");
            }
            Pane::Evaluation => {
                ui.heading("Scorecard");
                ui.label("Communication, problem solving, code quality.");
            }
            Pane::Transcript => {
                ui.label("[00:00] Interviewer: Tell me about yourself.");
            }
            Pane::Notes | Pane::Scratch(_) => {
                ui.label("Panel placeholder.");
            }
        }
    }
}

struct App {
    panels: LayoutManager<Pane>,
    behavior: Behavior,
    next_scratch: u32,
    log: Vec<String>,
}

impl Default for App {
    fn default() -> Self {
        let mut panels = LayoutManager::new(egui::vec2(1200.0, 800.0));
        for pane in [Pane::Resume, Pane::Evaluation] {
            if let Err(err) = panels.add_panel(PanelDescriptor::new(pane.id(), pane.title(), pane)) {
                log::error!("{err}");
            }
        }

        Self {
            panels,
            behavior: Behavior,
            next_scratch: 1,
            log: Vec::new(),
        }
    }
}

impl App {
    fn add(&mut self, pane: Pane) {
        match self.panels.add_panel(PanelDescriptor::new(pane.id(), pane.title(), pane)) {
            Ok(()) => self.log.push(format!("added {}", pane.id())),
            Err(err) => self.log.push(err.to_string()),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for mode in LayoutMode::ALL {
                    if ui
                        .selectable_label(self.panels.layout_mode() == mode, mode.label())
                        .clicked()
                    {
                        self.panels.set_layout_mode(mode);
                    }
                }

                ui.separator();

                for pane in [Pane::Notes, Pane::Transcript] {
                    if ui.button(format!("+ {}", pane.title())).clicked() {
                        self.add(pane);
                    }
                }
                if ui.button("+ Scratch").clicked() {
                    let pane = Pane::Scratch(self.next_scratch);
                    self.next_scratch += 1;
                    self.add(pane);
                }
                if ui.button("Re-arrange").clicked() {
                    self.panels.relayout();
                }
            });
        });

        egui::TopBottomPanel::bottom("events")
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.log {
                            ui.monospace(line);
                        }
                    });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.panels.ui(ui, &mut self.behavior);
            });

        for event in self.panels.drain_events() {
            let verb = match &event {
                // Drags report every tick; keep the log readable.
                PanelEvent::Moved { .. } | PanelEvent::Resized { .. } => {
                    log::trace!("{event:?}");
                    continue;
                }
                PanelEvent::Closed { .. } => "closed",
                PanelEvent::Expanded { .. } => "expanded",
                PanelEvent::Compressed { .. } => "compressed",
            };
            self.log.push(format!("{verb} {}", event.panel_id()));
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("egui_floating_panels: interview console"),
        ..Default::default()
    };
    eframe::run_native(
        "egui_floating_panels: interview console",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )
}
