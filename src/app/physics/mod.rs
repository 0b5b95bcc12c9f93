mod forces;

use eframe::egui::Vec2;

use forces::{apply_axis_bias, apply_charge, apply_collision, apply_link_springs, recenter};

const ALPHA_MIN: f32 = 0.001;
const ALPHA_DECAY: f32 = 0.0228;
const VELOCITY_RETAIN: f32 = 0.6;

/// Alpha target used while a node is being dragged; enough to keep the
/// layout resettling around the pinned node without reheating it fully.
pub(in crate::app) const DRAG_ALPHA_TARGET: f32 = 0.005;

/// Per-node state owned by the simulation. `pin` is the drag override:
/// while set, the node is snapped back onto it at the end of every step,
/// exempting it from physics-driven movement.
#[derive(Clone, Debug)]
pub(in crate::app) struct SimNode {
    pub(in crate::app) pos: Vec2,
    pub(in crate::app) vel: Vec2,
    pub(in crate::app) pin: Option<Vec2>,
    pub(in crate::app) collide_radius: f32,
    pub(in crate::app) target_x: f32,
}

#[derive(Clone, Copy, Debug)]
pub(in crate::app) struct SimConfig {
    pub(in crate::app) viewport: Vec2,
    pub(in crate::app) link_distance: f32,
    pub(in crate::app) link_strength: f32,
    pub(in crate::app) charge_strength: f32,
    pub(in crate::app) band_strength: f32,
    pub(in crate::app) vertical_strength: f32,
}

impl SimConfig {
    pub(in crate::app) fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            link_distance: 80.0,
            link_strength: 0.4,
            charge_strength: -10.0,
            band_strength: 0.1,
            vertical_strength: 0.7,
        }
    }
}

/// The layout engine. Owns all position state; the renderer only ever sees
/// the `nodes()` snapshot, and all mutation goes through the methods here.
pub(in crate::app) struct Simulation {
    nodes: Vec<SimNode>,
    links: Vec<(usize, usize)>,
    config: SimConfig,
    alpha: f32,
    alpha_target: f32,
}

impl Simulation {
    pub(in crate::app) fn new(
        nodes: Vec<SimNode>,
        links: Vec<(usize, usize)>,
        config: SimConfig,
    ) -> Self {
        Self {
            nodes,
            links,
            config,
            alpha: 1.0,
            alpha_target: 0.0,
        }
    }

    pub(in crate::app) fn nodes(&self) -> &[SimNode] {
        &self.nodes
    }

    pub(in crate::app) fn links(&self) -> &[(usize, usize)] {
        &self.links
    }

    pub(in crate::app) fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// Pins a node at `pos`. Used for drag start and every drag move; the
    /// pin stays in place until the node is pinned somewhere else.
    pub(in crate::app) fn pin_node(&mut self, index: usize, pos: Vec2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin = Some(pos);
            node.pos = pos;
            node.vel = Vec2::ZERO;
        }
    }

    pub(in crate::app) fn set_alpha_target(&mut self, target: f32) {
        self.alpha_target = target;
    }

    pub(in crate::app) fn reheat(&mut self) {
        self.alpha = 1.0;
    }

    /// One tick. Returns false once the simulation has cooled below the
    /// activity threshold (and its target would keep it there).
    pub(in crate::app) fn step(&mut self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        if self.alpha < ALPHA_MIN && self.alpha_target < ALPHA_MIN {
            return false;
        }

        self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;

        let alpha = self.alpha;
        apply_link_springs(
            &mut self.nodes,
            &self.links,
            self.config.link_distance,
            self.config.link_strength,
            alpha,
        );
        apply_charge(&mut self.nodes, self.config.charge_strength, alpha);
        apply_axis_bias(&mut self.nodes, &self.config, alpha);
        apply_collision(&mut self.nodes);

        for node in &mut self.nodes {
            node.vel *= VELOCITY_RETAIN;
            node.pos += node.vel;
        }

        recenter(&mut self.nodes, self.config.viewport * 0.5);

        for node in &mut self.nodes {
            if let Some(pin) = node.pin {
                node.pos = pin;
                node.vel = Vec2::ZERO;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    fn sim_node(x: f32, y: f32, collide_radius: f32) -> SimNode {
        SimNode {
            pos: vec2(x, y),
            vel: Vec2::ZERO,
            pin: None,
            collide_radius,
            target_x: 640.0,
        }
    }

    fn three_node_sim() -> Simulation {
        let nodes = vec![
            sim_node(400.0, 300.0, 16.0),
            sim_node(700.0, 500.0, 40.0),
            sim_node(600.0, 200.0, 16.0),
        ];
        let links = vec![(0, 1), (2, 1)];
        Simulation::new(nodes, links, SimConfig::new(vec2(1280.0, 800.0)))
    }

    #[test]
    fn pinned_node_never_drifts() {
        let mut sim = three_node_sim();
        let pin = vec2(100.0, 200.0);
        sim.pin_node(0, pin);
        sim.set_alpha_target(DRAG_ALPHA_TARGET);

        for _ in 0..50 {
            sim.step();
        }
        sim.set_alpha_target(0.0);
        for _ in 0..400 {
            sim.step();
        }

        assert_eq!(sim.nodes()[0].pos, pin);
    }

    #[test]
    fn simulation_cools_down_and_sleeps() {
        let mut sim = three_node_sim();

        let mut slept = false;
        for _ in 0..1000 {
            if !sim.step() {
                slept = true;
                break;
            }
        }
        assert!(slept, "simulation should cool below the alpha threshold");
        assert!(!sim.step());
    }

    #[test]
    fn drag_target_wakes_a_sleeping_simulation() {
        let mut sim = three_node_sim();
        while sim.step() {}

        sim.set_alpha_target(DRAG_ALPHA_TARGET);
        assert!(sim.step());

        sim.set_alpha_target(0.0);
        let mut slept = false;
        for _ in 0..1000 {
            if !sim.step() {
                slept = true;
                break;
            }
        }
        assert!(slept);

        sim.reheat();
        assert!(sim.step());
    }

    #[test]
    fn band_target_pulls_a_node_horizontally() {
        let mut nodes = vec![sim_node(640.0, 400.0, 40.0), sim_node(642.0, 400.0, 40.0)];
        nodes[0].target_x = 128.0;
        nodes[1].target_x = 1152.0;
        let mut sim = Simulation::new(nodes, Vec::new(), SimConfig::new(vec2(1280.0, 800.0)));

        for _ in 0..200 {
            sim.step();
        }

        assert!(sim.nodes()[0].pos.x < sim.nodes()[1].pos.x - 100.0);
    }

    #[test]
    fn centroid_settles_on_the_viewport_center() {
        let mut sim = three_node_sim();
        sim.step();

        let mut centroid = Vec2::ZERO;
        for node in sim.nodes() {
            centroid += node.pos;
        }
        centroid /= sim.nodes().len() as f32;

        assert!((centroid - vec2(640.0, 400.0)).length() < 0.01);
    }
}
