use std::collections::hash_map::DefaultHasher;
use std::f32::consts::TAU;
use std::hash::{Hash, Hasher};

use eframe::egui::{Stroke, Vec2, vec2};

use crate::data::{BucketGraph, HubKind, NodeRef};

use super::super::physics::{SimConfig, SimNode, Simulation};
use super::super::render_utils::{
    COMPLETED_OUTLINE, COMPLETED_OUTLINE_WIDTH, HUB_OUTLINE, OrdinalScale, hub_color,
};
use super::super::{RenderGraph, RenderNode, ViewModel};

const ENTRY_DRAW_RADIUS: f32 = 10.0;
const HUB_DRAW_RADIUS: f32 = 6.0;
const ENTRY_COLLIDE_RADIUS: f32 = 16.0;
const HUB_COLLIDE_RADIUS: f32 = 40.0;

/// Horizontal band (as a fraction of the viewport width) a category hub is
/// pulled toward. The mixed casing mirrors the dataset's category values.
fn category_band(value: &str) -> f32 {
    match value {
        "Adventure" => 0.1,
        "skill" => 0.3,
        "project" => 0.6,
        "experience" => 0.9,
        _ => 0.5,
    }
}

fn stable_pair(key: &str) -> (f32, f32) {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let hash = hasher.finish();

    let x = ((hash & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    let y = (((hash >> 32) & 0xffff_ffff) as f64 / u32::MAX as f64) as f32;
    ((x * 2.0) - 1.0, (y * 2.0) - 1.0)
}

/// Deterministic starting spot: a golden-angle spiral around the viewport
/// center, jittered by a hash of the node's key so reloads reproduce the
/// same layout.
fn initial_position(index: usize, key: &str, center: Vec2) -> Vec2 {
    let angle = (index as f32) * 0.618_034 * TAU;
    let radius = 16.0 * ((index as f32) + 0.5).sqrt();
    let (jx, jy) = stable_pair(key);
    center + (vec2(angle.cos(), angle.sin()) * radius) + vec2(jx * 6.0, jy * 6.0)
}

pub(in crate::app) fn build_render_graph(graph: &BucketGraph, viewport: Vec2) -> RenderGraph {
    let center = viewport * 0.5;
    let entry_count = graph.entries.len();
    let mut scale = OrdinalScale::seeded();

    let mut nodes = Vec::with_capacity(graph.node_count());
    let mut sim_nodes = Vec::with_capacity(graph.node_count());

    for (index, entry) in graph.entries.iter().enumerate() {
        let outline = entry
            .completed
            .then(|| Stroke::new(COMPLETED_OUTLINE_WIDTH, COMPLETED_OUTLINE));
        nodes.push(RenderNode {
            name: entry.name.clone(),
            node_ref: NodeRef::Entry(index),
            draw_radius: ENTRY_DRAW_RADIUS,
            fill: scale.color(entry.category.as_deref().unwrap_or("")),
            outline,
        });
        sim_nodes.push(SimNode {
            pos: initial_position(index, &entry.name, center),
            vel: Vec2::ZERO,
            pin: None,
            collide_radius: ENTRY_COLLIDE_RADIUS,
            target_x: center.x,
        });
    }

    for (index, hub) in graph.hubs.iter().enumerate() {
        let target_x = if hub.kind == HubKind::Category {
            viewport.x * category_band(&hub.name)
        } else {
            center.x
        };
        nodes.push(RenderNode {
            name: hub.name.clone(),
            node_ref: NodeRef::Hub(index),
            draw_radius: HUB_DRAW_RADIUS,
            fill: hub_color(hub.kind),
            outline: Some(Stroke::new(1.0, HUB_OUTLINE)),
        });
        sim_nodes.push(SimNode {
            pos: initial_position(entry_count + index, &hub.id, center),
            vel: Vec2::ZERO,
            pin: None,
            collide_radius: HUB_COLLIDE_RADIUS,
            target_x,
        });
    }

    let node_index = |node_ref: NodeRef| match node_ref {
        NodeRef::Entry(index) => index,
        NodeRef::Hub(index) => entry_count + index,
    };
    let edges: Vec<(usize, usize)> = graph
        .links
        .iter()
        .map(|link| (node_index(link.source), node_index(link.target)))
        .collect();

    let mut neighbors = vec![Vec::new(); nodes.len()];
    for &(source, target) in &edges {
        if source < nodes.len() && target < nodes.len() && source != target {
            neighbors[source].push(target);
            neighbors[target].push(source);
        }
    }

    RenderGraph {
        nodes,
        neighbors,
        sim: Simulation::new(sim_nodes, edges, SimConfig::new(viewport)),
    }
}

impl ViewModel {
    /// Builds the render graph on first use; the viewport dimensions are
    /// captured here once and never refreshed on resize.
    pub(in crate::app) fn ensure_render_graph(&mut self, viewport: Vec2) {
        if self.render_graph.is_none() {
            self.render_graph = Some(build_render_graph(&self.graph, viewport));
        }
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use crate::data::{Entry, Hub, Link};

    use super::*;

    fn entry(name: &str, category: Option<&str>, completed: bool) -> Entry {
        Entry {
            name: name.to_owned(),
            category: category.map(str::to_owned),
            continent: None,
            country: None,
            topics: None,
            completed,
        }
    }

    fn sample_graph() -> BucketGraph {
        let entries = vec![
            entry("Kyoto", Some("Adventure"), true),
            entry("learn pottery", Some("skill"), false),
        ];
        let hubs = vec![
            Hub::new(HubKind::Category, "Adventure"),
            Hub::new(HubKind::Category, "skill"),
            Hub::new(HubKind::Continent, "Asia"),
        ];
        let links = vec![
            Link::new(NodeRef::Entry(0), NodeRef::Hub(2)),
            Link::new(NodeRef::Entry(1), NodeRef::Hub(1)),
        ];
        BucketGraph {
            entries,
            hubs,
            links,
        }
    }

    #[test]
    fn entries_precede_hubs_and_links_resolve_to_indices() {
        let render = build_render_graph(&sample_graph(), vec2(1280.0, 800.0));

        assert_eq!(render.nodes.len(), 5);
        assert_eq!(render.nodes[0].node_ref, NodeRef::Entry(0));
        assert_eq!(render.nodes[2].node_ref, NodeRef::Hub(0));
        assert_eq!(render.sim.links(), &[(0, 4), (1, 3)]);
        assert_eq!(render.neighbors[0], vec![4]);
        assert_eq!(render.neighbors[4], vec![0]);
    }

    #[test]
    fn radii_split_between_entries_and_hubs() {
        let render = build_render_graph(&sample_graph(), vec2(1280.0, 800.0));

        assert_eq!(render.nodes[0].draw_radius, ENTRY_DRAW_RADIUS);
        assert_eq!(render.nodes[2].draw_radius, HUB_DRAW_RADIUS);
        assert_eq!(render.sim.nodes()[0].collide_radius, ENTRY_COLLIDE_RADIUS);
        assert_eq!(render.sim.nodes()[2].collide_radius, HUB_COLLIDE_RADIUS);
    }

    #[test]
    fn only_completed_entries_carry_the_accent_outline() {
        let render = build_render_graph(&sample_graph(), vec2(1280.0, 800.0));

        let completed = render.nodes[0].outline.expect("completed outline");
        assert_eq!(completed.color, COMPLETED_OUTLINE);
        assert_eq!(completed.width, COMPLETED_OUTLINE_WIDTH);
        assert!(render.nodes[1].outline.is_none());
    }

    #[test]
    fn category_hubs_target_their_bands_and_others_target_the_center() {
        let render = build_render_graph(&sample_graph(), vec2(1000.0, 800.0));

        // Entries at index 0/1, then Adventure, skill, Asia hubs.
        assert_eq!(render.sim.nodes()[0].target_x, 500.0);
        assert_eq!(render.sim.nodes()[2].target_x, 100.0);
        assert_eq!(render.sim.nodes()[3].target_x, 300.0);
        assert_eq!(render.sim.nodes()[4].target_x, 500.0);
    }

    #[test]
    fn initial_placement_is_deterministic() {
        let first = build_render_graph(&sample_graph(), vec2(1280.0, 800.0));
        let second = build_render_graph(&sample_graph(), vec2(1280.0, 800.0));

        for (a, b) in first.sim.nodes().iter().zip(second.sim.nodes()) {
            assert_eq!(a.pos, b.pos);
        }
    }
}
