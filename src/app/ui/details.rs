use eframe::egui::{self, RichText, Ui};

use crate::data::NodeRef;

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection Details");
        ui.add_space(6.0);

        let Some(selected) = self.selected else {
            ui.label("Click a node in the graph to inspect it.");
            return;
        };

        let Some(render) = self.render_graph.as_ref() else {
            ui.label("The graph has not been laid out yet.");
            return;
        };
        let Some(node) = render.nodes.get(selected) else {
            ui.label("Selected node no longer exists.");
            return;
        };

        match node.node_ref {
            NodeRef::Entry(entry_index) => {
                let entry = &self.graph.entries[entry_index];
                ui.label(RichText::new(&entry.name).strong());
                ui.add_space(6.0);
                field_row(ui, "Category", entry.category.as_deref());
                field_row(ui, "Continent", entry.continent.as_deref());
                field_row(ui, "Country", entry.country.as_deref());
                field_row(ui, "Topics", entry.topics.as_deref());
                ui.label(format!(
                    "Completed: {}",
                    if entry.completed { "yes" } else { "no" }
                ));
            }
            NodeRef::Hub(hub_index) => {
                let hub = &self.graph.hubs[hub_index];
                ui.label(RichText::new(&hub.name).strong());
                ui.small(hub.id.as_str());
                ui.add_space(6.0);
                ui.label(format!("Grouping: {}", hub.kind.grouping()));
            }
        }

        ui.separator();
        ui.label(RichText::new("Linked nodes").strong());

        let neighbors: Vec<(usize, String)> = render
            .neighbors
            .get(selected)
            .into_iter()
            .flatten()
            .map(|&index| (index, render.nodes[index].name.clone()))
            .collect();

        if neighbors.is_empty() {
            ui.label("No links touch this node.");
            return;
        }

        let mut next_selection = None;
        egui::ScrollArea::vertical()
            .id_salt("linked_nodes_scroll")
            .max_height(320.0)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, name) in &neighbors {
                    if ui.link(name.as_str()).clicked() {
                        next_selection = Some(*index);
                    }
                }
            });

        if let Some(index) = next_selection {
            self.set_selected(Some(index));
        }
    }
}

fn field_row(ui: &mut Ui, label: &str, value: Option<&str>) {
    ui.label(format!("{label}: {}", value.unwrap_or("-")));
}
