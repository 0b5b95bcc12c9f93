use eframe::egui::{Color32, Pos2, Rect, Vec2};

use crate::data::HubKind;

pub(super) const BACKGROUND: Color32 = Color32::from_rgb(10, 37, 113);
pub(super) const EDGE_COLOR: Color32 = Color32::from_rgba_premultiplied(92, 92, 92, 153); // #999 at 60%
pub(super) const LABEL_COLOR: Color32 = Color32::WHITE;
pub(super) const HUB_OUTLINE: Color32 = Color32::WHITE;
pub(super) const COMPLETED_OUTLINE: Color32 = Color32::from_rgb(255, 119, 0);
pub(super) const COMPLETED_OUTLINE_WIDTH: f32 = 2.0;

pub(super) const CATEGORY_DOMAIN: [&str; 4] = ["Adventure", "Skill", "Project", "Experience"];
pub(super) const CATEGORY_PALETTE: [Color32; 4] = [
    Color32::from_rgb(117, 139, 253),
    Color32::from_rgb(9, 188, 138),
    Color32::from_rgb(231, 25, 104),
    Color32::from_rgb(254, 228, 64),
];

pub(super) fn hub_color(kind: HubKind) -> Color32 {
    match kind {
        HubKind::Category => Color32::from_rgb(0, 0, 0),
        HubKind::Continent => Color32::from_rgb(134, 182, 62),
        HubKind::Country => Color32::from_rgb(247, 161, 185),
        HubKind::Topics => Color32::from_rgb(59, 203, 255),
    }
}

/// Ordinal color scale over category values: the four known categories are
/// seeded into the domain, unseen values are appended as they appear and
/// wrap around the palette.
pub(super) struct OrdinalScale {
    domain: Vec<String>,
}

impl OrdinalScale {
    pub(super) fn seeded() -> Self {
        Self {
            domain: CATEGORY_DOMAIN.map(str::to_owned).to_vec(),
        }
    }

    pub(super) fn color(&mut self, value: &str) -> Color32 {
        let index = match self.domain.iter().position(|known| known == value) {
            Some(index) => index,
            None => {
                self.domain.push(value.to_owned());
                self.domain.len() - 1
            }
        };
        CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
    }
}

pub(super) fn blend_color(base: Color32, overlay: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let inverse = 1.0 - amount;

    Color32::from_rgba_unmultiplied(
        ((base.r() as f32 * inverse) + (overlay.r() as f32 * amount)) as u8,
        ((base.g() as f32 * inverse) + (overlay.g() as f32 * amount)) as u8,
        ((base.b() as f32 * inverse) + (overlay.b() as f32 * amount)) as u8,
        ((base.a() as f32 * inverse) + (overlay.a() as f32 * amount)) as u8,
    )
}

pub(super) fn dim_color(color: Color32, factor: f32) -> Color32 {
    let factor = factor.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (color.r() as f32 * factor) as u8,
        (color.g() as f32 * factor) as u8,
        (color.b() as f32 * factor) as u8,
        (color.a() as f32 * (0.45 + (factor * 0.55))) as u8,
    )
}

// World space is the simulation's viewport coordinate system, anchored at
// the top-left of the graph rect.
pub(super) fn world_to_screen(rect: Rect, pan: Vec2, zoom: f32, world: Vec2) -> Pos2 {
    rect.left_top() + pan + world * zoom
}

pub(super) fn screen_to_world(rect: Rect, pan: Vec2, zoom: f32, screen: Pos2) -> Vec2 {
    (screen - rect.left_top() - pan) / zoom
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;

    use super::*;

    #[test]
    fn seeded_categories_map_to_the_fixed_palette() {
        let mut scale = OrdinalScale::seeded();
        assert_eq!(scale.color("Adventure"), CATEGORY_PALETTE[0]);
        assert_eq!(scale.color("Experience"), CATEGORY_PALETTE[3]);
        assert_eq!(scale.color("Skill"), CATEGORY_PALETTE[1]);
    }

    #[test]
    fn unknown_categories_extend_the_domain_and_wrap_the_palette() {
        let mut scale = OrdinalScale::seeded();
        assert_eq!(scale.color("Travel"), CATEGORY_PALETTE[0]);
        assert_eq!(scale.color("Music"), CATEGORY_PALETTE[1]);
        // A repeated unknown value keeps its assignment.
        assert_eq!(scale.color("Travel"), CATEGORY_PALETTE[0]);
    }

    #[test]
    fn screen_world_round_trip() {
        let rect = Rect::from_min_size(Pos2::new(100.0, 50.0), vec2(800.0, 600.0));
        let pan = vec2(30.0, -12.0);
        let zoom = 1.6;
        let world = vec2(240.0, 360.0);

        let screen = world_to_screen(rect, pan, zoom, world);
        let back = screen_to_world(rect, pan, zoom, screen);
        assert!((back - world).length() < 0.001);
    }
}
