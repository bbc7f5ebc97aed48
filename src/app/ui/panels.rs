use eframe::egui::{self, Align, Context, Layout};

use crate::data::GraphData;

use super::super::render_utils::Palette;
use super::super::zoom::Transform;
use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn new(data: GraphData) -> Self {
        log::info!(
            "view model ready: {} nodes, {} links",
            data.node_count(),
            data.link_count()
        );

        Self {
            data,
            selected: None,
            search: String::new(),
            search_match_cache: None,
            transform: Transform::default(),
            palette: Palette::default(),
            drag_node: None,
            scene: None,
            simulation: None,
            scene_dirty: true,
        }
    }

    pub(in crate::app) fn show(
        &mut self,
        ctx: &Context,
        source: &str,
        reload_requested: &mut bool,
        is_loading: bool,
    ) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("graphfolio");
                    ui.separator();
                    ui.label(format!("source: {source}"));
                    ui.label(format!("nodes: {}", self.data.node_count()));
                    ui.label(format!("links: {}", self.data.link_count()));

                    let reload_button = ui.add_enabled(!is_loading, egui::Button::new("Reload"));
                    if reload_button.clicked() {
                        *reload_requested = true;
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("zoom: {:.2}x", self.transform.k));
                        if let Some(sim) = &self.simulation {
                            ui.label(format!("heat: {:.3}", sim.alpha()));
                        }
                        let search_edit = ui.add(
                            egui::TextEdit::singleline(&mut self.search)
                                .hint_text("search titles")
                                .desired_width(180.0),
                        );
                        if search_edit.changed() {
                            self.search_match_cache = None;
                        }
                    });
                });
            });

        if self.selected.is_some() {
            egui::SidePanel::right("content")
                .resizable(true)
                .default_width(340.0)
                .show(ctx, |ui| self.draw_content_panel(ui));
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if is_loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.heading("Reloading knowledge graph...");
                    ui.add_space(8.0);
                    ui.spinner();
                });
            } else {
                self.draw_graph(ui);
            }
        });
    }

    /// Selection handed to the content detail panel. Set by clicking a node,
    /// cleared only by the panel's explicit close action.
    pub(in crate::app) fn set_selected(&mut self, selected: Option<String>) {
        if self.selected == selected {
            return;
        }

        match &selected {
            Some(id) => log::debug!("selected node {id}"),
            None => log::debug!("selection cleared"),
        }
        self.selected = selected;
    }

    /// Called exactly once when the owning view goes away or its data set is
    /// replaced; the simulation must not outlive the nodes it mutates.
    pub(in crate::app) fn teardown(&mut self) {
        if let Some(sim) = self.simulation.as_mut()
            && !sim.is_stopped()
        {
            sim.stop();
        }
    }
}
