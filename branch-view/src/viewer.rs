//! Interactive branching tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`GrowthDriver`] and
//! implements [`eframe::App`] to render and control the growth through
//! an egui UI.

use branch_core::{
    BranchColor, Point, GrowthConfig, GrowthDriver, Probabilities, StepReport, dice::DrawSource,
};
use eframe::App;
use glam::Vec2;
use rand::rngs::ThreadRng;

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Handle UI interactions (sliders, `Grow`, `Auto`, `Reset`).
/// 2. Call [`GrowthDriver::tick`], which steps once while auto-grow is on.
/// 3. Render the committed branches.
///
/// ### Fields
/// - `driver` - Growth state, configuration and random source `R`
///   (thread-local RNG by default).
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
/// - `last_new` - Branch indices committed by the last step (for highlighting).
pub struct Viewer<R = ThreadRng> {
    driver: GrowthDriver<R>,

    zoom: f32,
    pan: egui::Vec2,

    last_new: Vec<usize>,
}

impl Viewer {
    /// Creates a viewer with a fresh growth run rooted at `cfg.root`.
    pub fn new(cfg: GrowthConfig) -> Self {
        Self::with_source(cfg, rand::rng())
    }
}

impl<R: DrawSource> Viewer<R> {
    /// Creates a viewer that draws its coin flips from `src`.
    pub fn with_source(cfg: GrowthConfig, src: R) -> Self {
        Self {
            driver: GrowthDriver::new(cfg, src),
            zoom: 1.0,
            pan: egui::vec2(20.0, 0.0),
            last_new: Vec::with_capacity(3),
        }
    }

    /// Clears all growth back to the configured root.
    ///
    /// Probabilities, camera and the auto-grow flag are kept.
    fn reset(&mut self) {
        self.driver.do_reset();
        self.last_new.clear();
    }

    /// Expands one growth point.
    fn step_once(&mut self) {
        let report = self.driver.do_step();
        self.record(report);
    }

    fn record(&mut self, report: StepReport) {
        if !report.is_noop() {
            self.last_new = report.committed;
        }
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates share the screen's orientation (y grows downward);
    /// they are scaled by `zoom` and offset by `pan` from the top-left of `rect`.
    fn world_to_screen(&self, p: Point, rect: egui::Rect) -> egui::Pos2 {
        self.vec_to_screen(p.as_vec2(), rect)
    }

    fn vec_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        egui::pos2(
            rect.min.x + p.x * self.zoom + self.pan.x,
            rect.min.y + p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// This is the inverse of [`Viewer::vec_to_screen`] (up to floating
    /// point rounding).
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let x = (p.x - rect.min.x - self.pan.x) / self.zoom;
        let y = (p.y - rect.min.y - self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    fn stroke_color(color: BranchColor) -> egui::Color32 {
        match color {
            BranchColor::Green => egui::Color32::GREEN,
            BranchColor::Red => egui::Color32::RED,
        }
    }

    /// Builds the top panel UI (growth controls and probability sliders).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Grow").clicked() {
                    self.step_once();
                }

                let auto_label = if self.driver.is_auto_growing() {
                    "⏸ Pause"
                } else {
                    "▶ Auto"
                };
                if ui.button(auto_label).clicked() {
                    self.driver.toggle_auto_grow();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 0.1..=10.0).text("Zoom"));
            });

            ui.horizontal(|ui| {
                let probs: &mut Probabilities = self.driver.probabilities_mut();
                ui.add(egui::Slider::new(&mut probs.down, 0.0..=100.0).text("down %"));
                ui.add(egui::Slider::new(&mut probs.straight, 0.0..=100.0).text("straight %"));
                ui.add(egui::Slider::new(&mut probs.up, 0.0..=100.0).text("up %"));
            });
        });
    }

    /// Builds the bottom status bar (node, branch and pending counts).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let state = self.driver.state();
                ui.label(format!("pending = {}", state.pending().len()));
                ui.label(format!("branches = {}", state.branches().len()));
                ui.separator();
                ui.label(format!(
                    "nodes = {} / {}",
                    state.node_count(),
                    state.node_budget()
                ));
            });
        });
    }

    /// Builds the central panel where branches are drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(0.1, 10.0);

                let screen_after = self.vec_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            let width = self.zoom.max(1.0);
            for b in self.driver.branches() {
                let a = self.world_to_screen(b.begin, rect);
                let e = self.world_to_screen(b.end, rect);
                painter.line_segment(
                    [a, e],
                    egui::Stroke::new(width, Self::stroke_color(b.color)),
                );
            }

            // Highlight the latest step.
            for &i in &self.last_new {
                if let Some(b) = self.driver.branches().get(i) {
                    let e = self.world_to_screen(b.end, rect);
                    painter.circle_filled(e, width * 1.5, egui::Color32::YELLOW);
                }
            }

            if let Some(report) = self.driver.tick() {
                self.record(report);
            }
            if self.driver.is_auto_growing() {
                ctx.request_repaint();
            }
        });
    }
}

impl<R: DrawSource> App for Viewer<R> {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
