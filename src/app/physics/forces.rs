use eframe::egui::{Vec2, vec2};

use super::{SimConfig, SimNode};

pub(super) fn apply_link_springs(
    nodes: &mut [SimNode],
    links: &[(usize, usize)],
    distance: f32,
    strength: f32,
    alpha: f32,
) {
    for &(source, target) in links {
        if source >= nodes.len() || target >= nodes.len() || source == target {
            continue;
        }

        let delta =
            (nodes[target].pos + nodes[target].vel) - (nodes[source].pos + nodes[source].vel);
        let length = delta.length().max(0.001);
        let pull = (length - distance) / length * strength * alpha;
        let correction = delta * pull * 0.5;

        nodes[target].vel -= correction;
        nodes[source].vel += correction;
    }
}

pub(super) fn apply_charge(nodes: &mut [SimNode], strength: f32, alpha: f32) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let delta = nodes[j].pos - nodes[i].pos;
            let distance_sq = delta.length_sq();
            let direction = if distance_sq > 0.0001 {
                delta / distance_sq.sqrt()
            } else {
                let angle =
                    ((i as f32) * 0.618_034 + (j as f32) * 0.414_214) * std::f32::consts::TAU;
                vec2(angle.cos(), angle.sin())
            };

            // Negative strength repels, as in the d3 many-body force.
            let push = strength * alpha / distance_sq.max(1.0).sqrt();
            let force = direction * push;

            nodes[i].vel += force;
            nodes[j].vel -= force;
        }
    }
}

pub(super) fn apply_collision(nodes: &mut [SimNode]) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let delta = nodes[i].pos - nodes[j].pos;
            let min_distance = nodes[i].collide_radius + nodes[j].collide_radius;
            let distance_sq = delta.length_sq();
            if distance_sq >= min_distance * min_distance {
                continue;
            }

            let distance = distance_sq.sqrt();
            let direction = if distance > 0.0001 {
                delta / distance
            } else {
                let angle =
                    ((i as f32) * 0.618_034 + (j as f32) * 0.414_214) * std::f32::consts::TAU;
                vec2(angle.cos(), angle.sin())
            };

            let overlap_push = (min_distance - distance) * 0.5;
            nodes[i].vel += direction * overlap_push;
            nodes[j].vel -= direction * overlap_push;
        }
    }
}

/// Horizontal pull toward each node's band target, vertical pull toward the
/// viewport's vertical center.
pub(super) fn apply_axis_bias(nodes: &mut [SimNode], config: &SimConfig, alpha: f32) {
    let center_y = config.viewport.y * 0.5;

    for node in nodes.iter_mut() {
        node.vel.x += (node.target_x - node.pos.x) * config.band_strength * alpha;
        node.vel.y += (center_y - node.pos.y) * config.vertical_strength * alpha;
    }
}

/// Translates the whole layout so its centroid sits on `center`.
pub(super) fn recenter(nodes: &mut [SimNode], center: Vec2) {
    if nodes.is_empty() {
        return;
    }

    let mut centroid = Vec2::ZERO;
    for node in nodes.iter() {
        centroid += node.pos;
    }
    centroid /= nodes.len() as f32;

    let shift = center - centroid;
    for node in nodes.iter_mut() {
        node.pos += shift;
    }
}
