use std::collections::VecDeque;

use eframe::egui::{self, Align, Context, Layout, Vec2};

use crate::data::BucketGraph;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(graph: BucketGraph) -> Self {
        Self {
            graph,
            selected: None,
            search: String::new(),
            pan: Vec2::ZERO,
            zoom: 1.0,
            live_physics: true,
            drag_node: None,
            render_graph: None,
            fps_current: 0.0,
            fps_samples: VecDeque::new(),
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        data_path: &str,
        reload_requested: &mut bool,
    ) {
        self.update_frame_stats(ctx);

        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("bucket-graph");
                    ui.separator();
                    ui.label(format!("dataset: {data_path}"));
                    ui.label(format!("entries: {}", self.graph.entries.len()));
                    ui.label(format!("hubs: {}", self.graph.hubs.len()));
                    ui.label(format!("links: {}", self.graph.links.len()));
                    ui.label(format!("completed: {}", self.graph.completed_count()));
                    if ui.button("Reload dataset").clicked() {
                        *reload_requested = true;
                    }
                    if ui.button("Reset view").clicked() {
                        self.pan = Vec2::ZERO;
                        self.zoom = 1.0;
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if let Some(fps_text) = self.frame_stats_text() {
                            ui.label(fps_text);
                        }
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
    }

    pub(in crate::app) fn set_selected(&mut self, selected: Option<usize>) {
        self.selected = selected;
    }

    fn update_frame_stats(&mut self, ctx: &Context) {
        const SAMPLE_WINDOW: usize = 120;

        let dt = ctx.input(|input| input.stable_dt);
        if dt <= f32::EPSILON {
            return;
        }

        self.fps_current = (1.0 / dt).clamp(0.0, 1000.0);
        self.fps_samples.push_back(self.fps_current);
        while self.fps_samples.len() > SAMPLE_WINDOW {
            self.fps_samples.pop_front();
        }
    }

    fn frame_stats_text(&self) -> Option<String> {
        if self.fps_samples.is_empty() {
            return None;
        }

        let avg = self.fps_samples.iter().sum::<f32>() / self.fps_samples.len() as f32;
        Some(format!("FPS {:.0} (avg {avg:.0})", self.fps_current))
    }
}
