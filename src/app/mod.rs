use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use eframe::egui::{self, Context, Vec2};

use crate::data::{GraphData, load_graph_data, sample_graph};

mod graph;
mod highlight;
mod render_utils;
mod sim;
mod ui;
mod zoom;

pub struct GraphfolioApp {
    graph_path: Option<PathBuf>,
    state: AppState,
    reload_rx: Option<Receiver<Result<GraphData, String>>>,
}

enum AppState {
    Loading {
        rx: Receiver<Result<GraphData, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    data: GraphData,
    selected: Option<String>,
    search: String,
    search_match_cache: Option<SearchMatchCache>,
    transform: zoom::Transform,
    palette: render_utils::Palette,
    drag_node: Option<usize>,
    scene: Option<SceneGraph>,
    simulation: Option<sim::Simulation>,
    scene_dirty: bool,
}

struct SearchMatchCache {
    query: String,
    matches: Arc<HashSet<usize>>,
}

/// Layout state for one data set. Nodes live in a dense arena; links hold
/// indices into it, resolved once at ingestion. Positions and velocities are
/// mutated by the simulation and the drag controller only.
struct SceneGraph {
    nodes: Vec<SceneNode>,
    links: Vec<SceneLink>,
    index_by_id: HashMap<String, usize>,
}

struct SceneNode {
    id: String,
    title: String,
    pos: Vec2,
    vel: Vec2,
    /// Pinned position while dragged; overrides physics until released.
    pin: Option<Vec2>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct SceneLink {
    source: usize,
    target: usize,
}

impl GraphfolioApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, graph_path: Option<PathBuf>) -> Self {
        let state = Self::start_load(graph_path.clone());
        Self {
            graph_path,
            state,
            reload_rx: None,
        }
    }

    fn spawn_load(graph_path: Option<PathBuf>) -> Receiver<Result<GraphData, String>> {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = match &graph_path {
                Some(path) => load_graph_data(path).map_err(|error| format!("{error:#}")),
                None => Ok(sample_graph()),
            };
            let _ = tx.send(result);
        });

        rx
    }

    fn start_load(graph_path: Option<PathBuf>) -> AppState {
        AppState::Loading {
            rx: Self::spawn_load(graph_path),
        }
    }

    fn graph_source(&self) -> String {
        match &self.graph_path {
            Some(path) => path.display().to_string(),
            None => "built-in sample".to_owned(),
        }
    }
}

impl eframe::App for GraphfolioApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let source = self.graph_source();
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(data) => AppState::Ready(Box::new(ViewModel::new(data))),
                        Err(error) => AppState::Error(error),
                    });
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading knowledge graph...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load knowledge graph");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.graph_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => {
                let mut reload_requested = false;
                let is_reloading = self.reload_rx.is_some();
                model.show(ctx, &source, &mut reload_requested, is_reloading);

                if reload_requested && self.reload_rx.is_none() {
                    self.reload_rx = Some(Self::spawn_load(self.graph_path.clone()));
                }

                if let Some(rx) = self.reload_rx.take() {
                    match rx.try_recv() {
                        Ok(result) => {
                            model.teardown();
                            transition = Some(match result {
                                Ok(data) => AppState::Ready(Box::new(ViewModel::new(data))),
                                Err(error) => AppState::Error(error),
                            });
                        }
                        Err(TryRecvError::Empty) => {
                            self.reload_rx = Some(rx);
                        }
                        Err(TryRecvError::Disconnected) => {
                            transition = Some(AppState::Error(
                                "Background load worker disconnected".to_owned(),
                            ));
                        }
                    }
                }
            }
        }

        if let Some(next_state) = transition {
            self.reload_rx = None;
            self.state = next_state;
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let AppState::Ready(model) = &mut self.state {
            model.teardown();
        }
    }
}
