use eframe::egui::{self, Color32, Sense, Ui, vec2};

use crate::data::HubKind;

use super::super::ViewModel;
use super::super::render_utils::{CATEGORY_DOMAIN, CATEGORY_PALETTE, hub_color};

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Graph Controls");
        ui.add_space(4.0);

        ui.checkbox(&mut self.live_physics, "Live physics simulation")
            .on_hover_text("Continuously step the force layout while viewing the graph.");

        let reheat = ui
            .button("Reheat simulation")
            .on_hover_text("Restart the cooling cycle so the layout resettles.")
            .clicked();

        if let Some(render) = self.render_graph.as_mut() {
            if reheat {
                render.sim.reheat();
            }

            ui.collapsing("Physics tuning", |ui| {
                let config = render.sim.config_mut();
                ui.add(
                    egui::Slider::new(&mut config.link_distance, 20.0..=200.0)
                        .text("Link distance"),
                )
                .on_hover_text("Preferred length of each link.");
                ui.add(
                    egui::Slider::new(&mut config.link_strength, 0.0..=1.0).text("Link strength"),
                )
                .on_hover_text("How firmly links pull toward their preferred length.");
                ui.add(egui::Slider::new(&mut config.charge_strength, -60.0..=0.0).text("Charge"))
                    .on_hover_text("Pairwise repulsion; more negative spreads the graph out.");
                ui.add(egui::Slider::new(&mut config.band_strength, 0.0..=1.0).text("Band pull"))
                    .on_hover_text("How strongly category hubs drift toward their bands.");
                ui.add(
                    egui::Slider::new(&mut config.vertical_strength, 0.0..=1.0)
                        .text("Vertical pull"),
                )
                .on_hover_text("How strongly nodes drift toward the vertical center.");
            });
        }

        ui.add_space(6.0);
        ui.label("Search by name")
            .on_hover_text("Fuzzy-highlight matching nodes without changing the layout.");
        ui.text_edit_singleline(&mut self.search);

        ui.separator();
        ui.label(egui::RichText::new("Legend").strong());
        for (name, color) in CATEGORY_DOMAIN.iter().zip(CATEGORY_PALETTE) {
            legend_row(ui, name, color);
        }
        ui.add_space(4.0);
        for kind in HubKind::ALL {
            legend_row(ui, &format!("{} hub", kind.grouping()), hub_color(kind));
        }
    }
}

fn legend_row(ui: &mut Ui, label: &str, color: Color32) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(vec2(12.0, 12.0), Sense::hover());
        ui.painter().circle_filled(rect.center(), 5.0, color);
        ui.label(label);
    });
}
