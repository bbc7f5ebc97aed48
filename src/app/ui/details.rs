use eframe::egui::{self, Align, Layout, RichText, Ui};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_content_panel(&mut self, ui: &mut Ui) {
        let mut close_requested = false;
        ui.horizontal(|ui| {
            ui.heading("Content");
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    close_requested = true;
                }
            });
        });
        ui.add_space(6.0);

        if close_requested {
            self.set_selected(None);
            return;
        }

        let Some(selected_id) = self.selected.clone() else {
            ui.label("Select a node from the graph.");
            return;
        };

        let Some(record) = self.data.record(&selected_id) else {
            ui.label("Selected item no longer exists in the data set.");
            return;
        };

        let title = record.title.clone();
        let kind = record.kind;
        let summary = record.summary.clone();
        let url = record.url.clone();
        let linked = self
            .data
            .linked_ids(&selected_id)
            .into_iter()
            .filter_map(|id| {
                self.data
                    .record(id)
                    .map(|linked_record| (id.to_owned(), linked_record.title.clone()))
            })
            .collect::<Vec<_>>();

        ui.label(RichText::new(title).strong());
        ui.small(format!("{}  ·  {}", kind.label(), selected_id));

        if let Some(summary) = summary {
            ui.add_space(6.0);
            ui.label(summary);
        }

        if let Some(url) = url {
            ui.add_space(6.0);
            ui.hyperlink_to("Open content", url);
        }

        ui.separator();
        ui.label(RichText::new("Linked items").strong());
        if linked.is_empty() {
            ui.label("No direct links.");
        } else {
            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for (id, linked_title) in linked {
                        if ui.link(linked_title).on_hover_text(id.as_str()).clicked() {
                            self.set_selected(Some(id));
                        }
                    }
                });
        }
    }
}
