use std::collections::HashSet;

use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, vec2};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use crate::data::NodeRef;

use super::super::ViewModel;
use super::super::render_utils::{
    BACKGROUND, EDGE_COLOR, LABEL_COLOR, blend_color, circle_visible, dim_color, world_to_screen,
};

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        let painter = ui.painter_at(rect);

        painter.rect_filled(rect, 0.0, BACKGROUND);

        self.ensure_render_graph(rect.size());
        self.handle_graph_zoom(ui, rect, &response);
        self.handle_graph_pan(&response);

        let pan = self.pan;
        let zoom = self.zoom;
        let live_physics = self.live_physics;
        let drag_active = self.drag_node.is_some();
        let search_query = self.search.trim().to_owned();

        let (screen_positions, screen_radii) = {
            let Some(render) = self.render_graph.as_mut() else {
                return;
            };

            let mut physics_moving = false;
            if live_physics || drag_active {
                physics_moving = render.sim.step();
            }
            if physics_moving || response.dragged() {
                ui.ctx().request_repaint();
            }

            let mut screen_positions = Vec::with_capacity(render.nodes.len());
            let mut screen_radii = Vec::with_capacity(render.nodes.len());
            for (node, sim_node) in render.nodes.iter().zip(render.sim.nodes()) {
                screen_positions.push(world_to_screen(rect, pan, zoom, sim_node.pos));
                screen_radii.push((node.draw_radius * zoom).clamp(1.5, 80.0));
            }
            (screen_positions, screen_radii)
        };

        let hovered =
            Self::hovered_index(ui, &screen_positions, &screen_radii).map(|(index, _)| index);
        self.handle_node_drag(rect, &response, hovered);

        if response.clicked_by(egui::PointerButton::Primary) {
            self.set_selected(hovered);
        }

        if self.drag_node.is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::Grabbing);
        } else if hovered.is_some() {
            ui.output_mut(|output| output.cursor_icon = egui::CursorIcon::PointingHand);
        }

        // While dragging, the pointer can outrun the node; keep treating the
        // grabbed node as the hovered one.
        let hovered = self.drag_node.or(hovered);
        let selected = self.selected;

        let Some(render) = self.render_graph.as_ref() else {
            return;
        };

        let matcher = SkimMatcherV2::default();
        let search_matches: HashSet<usize> = if selected.is_none() && !search_query.is_empty() {
            render
                .nodes
                .iter()
                .enumerate()
                .filter_map(|(index, node)| {
                    fuzzy_match_score(&matcher, &node.name, &search_query).map(|_| index)
                })
                .collect()
        } else {
            HashSet::new()
        };
        let search_active = !search_matches.is_empty();
        let selection_active = selected.is_some();

        for &(source, target) in render.sim.links() {
            if source >= screen_positions.len() || target >= screen_positions.len() {
                continue;
            }

            let start = screen_positions[source];
            let end = screen_positions[target];
            let incident =
                selected.is_some_and(|selected| source == selected || target == selected);

            let (line_width, line_color) = if incident {
                (
                    (1.6 * zoom.sqrt()).clamp(0.9, 3.2),
                    Color32::from_gray(220),
                )
            } else if selection_active {
                ((0.8 * zoom.sqrt()).clamp(0.4, 2.0), dim_color(EDGE_COLOR, 0.4))
            } else {
                ((1.0 * zoom.sqrt()).clamp(0.5, 2.5), EDGE_COLOR)
            };

            painter.line_segment([start, end], Stroke::new(line_width, line_color));
        }

        for (index, node) in render.nodes.iter().enumerate() {
            let position = screen_positions[index];
            let radius = screen_radii[index];
            if !circle_visible(rect, position, radius) {
                continue;
            }

            let is_selected = selected == Some(index);
            let is_hovered = hovered == Some(index);
            let is_related = selected.is_some_and(|selected| {
                render
                    .neighbors
                    .get(selected)
                    .is_some_and(|neighbors| neighbors.contains(&index))
            });
            let is_match = search_matches.contains(&index);

            let fill = if is_hovered {
                blend_color(node.fill, Color32::WHITE, 0.20)
            } else if is_match {
                blend_color(node.fill, Color32::from_rgb(103, 196, 255), 0.45)
            } else if selection_active && !is_selected && !is_related {
                dim_color(node.fill, 0.45)
            } else if search_active && !is_match {
                dim_color(node.fill, 0.38)
            } else {
                node.fill
            };

            painter.circle_filled(position, radius, fill);
            if let Some(outline) = node.outline {
                painter.circle_stroke(position, radius, outline);
            }
            if is_selected {
                painter.circle_stroke(
                    position,
                    radius + 3.0,
                    Stroke::new(2.0, Color32::from_gray(235)),
                );
            }

            if is_hovered || is_selected {
                painter.text(
                    position + vec2(0.0, -12.0),
                    Align2::CENTER_BOTTOM,
                    &node.name,
                    FontId::proportional(12.0),
                    LABEL_COLOR,
                );
            }
        }

        if let Some(index) = hovered
            && let Some(node) = render.nodes.get(index)
        {
            let summary = match node.node_ref {
                NodeRef::Entry(entry_index) => {
                    let entry = &self.graph.entries[entry_index];
                    format!(
                        "{}  |  {}  |  {}",
                        node.name,
                        entry.category.as_deref().unwrap_or("uncategorized"),
                        if entry.completed { "completed" } else { "open" }
                    )
                }
                NodeRef::Hub(hub_index) => {
                    let hub = &self.graph.hubs[hub_index];
                    format!(
                        "{}  |  {} hub  |  {} links",
                        node.name,
                        hub.kind.grouping(),
                        render.neighbors.get(index).map_or(0, Vec::len)
                    )
                }
            };
            painter.text(
                rect.left_top() + vec2(10.0, 10.0),
                Align2::LEFT_TOP,
                summary,
                FontId::proportional(13.0),
                Color32::from_gray(240),
            );
        }
    }
}
