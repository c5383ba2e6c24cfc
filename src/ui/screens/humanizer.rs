use std::time::{Duration, Instant};

use eframe::egui::{self, Color32};
use tracing::{error, info};

use crate::generation::GenerationError;
use crate::ui::components::docs::DocsView;
use crate::ui::components::gauge::MetricsGauge;
use crate::ui::components::input_panel::InputPanel;
use crate::ui::components::options_panel::OptionsPanel;
use crate::ui::components::result_panel::ResultPanel;
use crate::ui::runtime::GenerationRuntime;
use crate::ui::state::{View, ViewState};

const HUMAN_SCORE_COLOR: Color32 = Color32::from_rgb(0x63, 0x66, 0xf1);
const READABILITY_COLOR: Color32 = Color32::from_rgb(0x10, 0xb9, 0x81);
const ERROR_COLOR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71);
const NOTICE_TTL: Duration = Duration::from_secs(2);
const LOADING_REPAINT: Duration = Duration::from_millis(100);

pub struct HumanizerApp {
    state: ViewState,
    runtime: GenerationRuntime,
    notice_since: Option<Instant>,
}

impl HumanizerApp {
    pub fn new(runtime: GenerationRuntime) -> Self {
        Self::with_state(runtime, ViewState::new())
    }

    pub fn with_state(runtime: GenerationRuntime, state: ViewState) -> Self {
        Self {
            state,
            runtime,
            notice_since: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ViewState {
        &mut self.state
    }

    /// Hands a new ticket to the runtime. No-op while loading or when blank.
    pub fn submit(&mut self) {
        let Some(ticket) = self.state.begin_submit() else {
            return;
        };
        let id = ticket.id;
        info!(ticket = id, "submission started");
        if let Err(err) = self.runtime.submit(ticket) {
            error!(error = %err, "failed to hand submission to runtime");
            self.state
                .finish_submit(id, Err(GenerationError::transport(err.to_string())));
        }
    }

    /// Applies every outcome the runtime has produced so far.
    pub fn poll_runtime(&mut self) {
        while let Some(outcome) = self.runtime.try_recv() {
            self.state.finish_submit(outcome.id, outcome.result);
        }
    }

    /// Blocks until the in-flight outcome arrives or `timeout` elapses.
    pub fn wait_for_outcome(&mut self, timeout: Duration) -> bool {
        match self.runtime.recv_timeout(timeout) {
            Some(outcome) => self.state.finish_submit(outcome.id, outcome.result),
            None => false,
        }
    }

    fn copy_result(&mut self, ctx: &egui::Context) {
        if let Some(text) = self.state.copy_result() {
            ctx.output_mut(|output| output.copied_text = text);
            self.notice_since = Some(Instant::now());
        }
    }

    fn expire_notice(&mut self) {
        if self
            .notice_since
            .is_some_and(|since| since.elapsed() >= NOTICE_TTL)
        {
            self.state.dismiss_notice();
            self.notice_since = None;
        }
    }

    fn show_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = egui::RichText::new("Humanoide AI").heading().strong();
                if ui
                    .add(egui::Label::new(brand).sense(egui::Sense::click()))
                    .clicked()
                {
                    self.state.show(View::App);
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let view = &mut self.state.view;
                    ui.selectable_value(view, View::Docs, "Documentation");
                    ui.selectable_value(view, View::App, "Application");
                });
            });
        });
    }

    fn show_footer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.weak("Redonnez une voix naturelle et humaine à vos écrits numériques.");
                ui.small("© 2026 Humanoide AI • Propulsé par Gemini");
            });
        });
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("settings")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                OptionsPanel {
                    enabled: !self.state.is_loading(),
                    options: &mut self.state.options,
                }
                .show(ui);
                if let Some(result) = self.state.result() {
                    ui.add_space(16.0);
                    MetricsGauge {
                        label: "Ressemblance Humaine",
                        value: result.human_score,
                        color: HUMAN_SCORE_COLOR,
                    }
                    .show(ui);
                    MetricsGauge {
                        label: "Lisibilité",
                        value: result.readability_score,
                        color: READABILITY_COLOR,
                    }
                    .show(ui);
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.small("MOTS");
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.strong(result.word_count.to_string());
                                },
                            );
                        });
                    });
                }
            });
    }

    fn show_workspace(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let char_count = self.state.char_count();
                let is_loading = self.state.is_loading();
                let can_submit = self.state.can_submit();
                let input = InputPanel {
                    text: &mut self.state.input_text,
                    char_count,
                    is_loading,
                    can_submit,
                }
                .show(ui);
                if input.clear {
                    self.state.clear_input();
                }
                if input.submit {
                    self.submit();
                }
                if let Some(message) = self.state.error() {
                    ui.add_space(8.0);
                    ui.colored_label(ERROR_COLOR, format!("⚠ {}", message));
                }
                if let Some(notice) = self.state.notice() {
                    ui.add_space(8.0);
                    ui.colored_label(READABILITY_COLOR, notice);
                }
                let copy = self.state.result().map_or(false, |result| {
                    ui.add_space(16.0);
                    ResultPanel {
                        result,
                        preserve_structure: self.state.options.preserve_structure,
                    }
                    .show(ui)
                    .copy
                });
                if copy {
                    self.copy_result(ui.ctx());
                }
            });
        });
    }

    fn show_docs(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if DocsView.show(ui) {
                self.state.show(View::App);
            }
        });
    }
}

impl eframe::App for HumanizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_runtime();
        self.expire_notice();
        self.show_header(ctx);
        self.show_footer(ctx);
        match self.state.view {
            View::App => {
                self.show_sidebar(ctx);
                self.show_workspace(ctx);
            }
            View::Docs => self.show_docs(ctx),
        }
        if self.state.is_loading() {
            ctx.request_repaint_after(LOADING_REPAINT);
        } else if self.notice_since.is_some() {
            ctx.request_repaint_after(NOTICE_TTL);
        }
    }
}
