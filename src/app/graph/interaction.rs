use eframe::egui::{self, Pos2, Rect, Ui};

use super::super::ViewModel;
use super::super::physics::DRAG_ALPHA_TARGET;
use super::super::render_utils::screen_to_world;

impl ViewModel {
    pub(in crate::app) fn handle_graph_zoom(
        &mut self,
        ui: &Ui,
        rect: Rect,
        response: &egui::Response,
    ) {
        if !response.hovered() {
            return;
        }

        let scroll = ui.input(|input| input.raw_scroll_delta.y);
        if scroll.abs() <= f32::EPSILON {
            return;
        }

        let pointer = ui
            .input(|input| input.pointer.hover_pos())
            .unwrap_or_else(|| rect.center());
        let world_before = screen_to_world(rect, self.pan, self.zoom, pointer);

        let zoom_factor = (1.0 + (scroll * 0.0018)).clamp(0.85, 1.15);
        self.zoom = (self.zoom * zoom_factor).clamp(0.05, 6.0);
        self.pan = pointer - rect.left_top() - (world_before * self.zoom);
    }

    pub(in crate::app) fn handle_graph_pan(&mut self, response: &egui::Response) {
        if response.dragged_by(egui::PointerButton::Secondary)
            || response.dragged_by(egui::PointerButton::Middle)
        {
            self.pan += response.drag_delta();
        }
    }

    pub(in crate::app) fn hovered_index(
        ui: &Ui,
        screen_positions: &[Pos2],
        screen_radii: &[f32],
    ) -> Option<(usize, f32)> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        (0..screen_positions.len())
            .filter_map(|index| {
                let distance = screen_positions[index].distance(pointer);
                (distance <= screen_radii[index]).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Primary-button node dragging. Drag start pins the grabbed node and
    /// nudges the simulation toward a low-energy resettle; every move
    /// re-pins at the pointer; release only resets the resettle target, so
    /// the node stays locked where it was dropped.
    pub(in crate::app) fn handle_node_drag(
        &mut self,
        rect: Rect,
        response: &egui::Response,
        hovered: Option<usize>,
    ) {
        let pan = self.pan;
        let zoom = self.zoom;
        let Some(render) = self.render_graph.as_mut() else {
            return;
        };

        if response.drag_started_by(egui::PointerButton::Primary)
            && let Some(index) = hovered
            && let Some(grabbed) = render.sim.nodes().get(index).map(|node| node.pos)
        {
            render.sim.pin_node(index, grabbed);
            render.sim.set_alpha_target(DRAG_ALPHA_TARGET);
            self.drag_node = Some(index);
        }

        if let Some(index) = self.drag_node
            && response.dragged_by(egui::PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            render
                .sim
                .pin_node(index, screen_to_world(rect, pan, zoom, pointer));
        }

        if response.drag_stopped_by(egui::PointerButton::Primary) && self.drag_node.take().is_some()
        {
            render.sim.set_alpha_target(0.0);
        }
    }
}
