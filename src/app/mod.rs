use std::collections::VecDeque;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use eframe::egui::{self, Color32, Context, Stroke, Vec2};

use crate::data::{BucketGraph, NodeRef, load_bucket_graph};

mod graph;
mod physics;
mod render_utils;
mod ui;

use physics::Simulation;

pub struct BucketGraphApp {
    data_path: String,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<BucketGraph, String>>,
    },
    Ready(ViewModel),
    Error(String),
}

struct ViewModel {
    graph: BucketGraph,
    selected: Option<usize>,
    search: String,
    pan: Vec2,
    zoom: f32,
    live_physics: bool,
    drag_node: Option<usize>,
    render_graph: Option<RenderGraph>,
    fps_current: f32,
    fps_samples: VecDeque<f32>,
}

/// Visual node data, index-aligned with the simulation's nodes: entries
/// first, hubs after. Positions live in the simulation; everything here is
/// fixed at build time.
struct RenderNode {
    name: String,
    node_ref: NodeRef,
    draw_radius: f32,
    fill: Color32,
    outline: Option<Stroke>,
}

struct RenderGraph {
    nodes: Vec<RenderNode>,
    neighbors: Vec<Vec<usize>>,
    sim: Simulation,
}

impl BucketGraphApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, data_path: String) -> Self {
        let state = Self::start_load(data_path.clone());
        Self { data_path, state }
    }

    fn start_load(data_path: String) -> AppState {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_bucket_graph(&data_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        AppState::Loading { rx }
    }
}

impl eframe::App for BucketGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(graph) => AppState::Ready(ViewModel::new(graph)),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading bucket-list dataset...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load bucket-list dataset");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.data_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                model.show(ctx, &self.data_path, &mut reload_requested);
                if reload_requested {
                    transition = Some(Self::start_load(self.data_path.clone()));
                }
            }
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}
