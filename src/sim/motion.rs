//! Per-tick movement with toroidal screen wrapping

use glam::Vec2;

use super::registry::Registry;
use super::state::Entity;
use crate::normalize_degrees;

/// Move every entity by its velocity and spin, then wrap at the screen edges
pub fn step(registry: &mut Registry, width: f32, height: f32) {
    for entity in registry.entities_mut() {
        entity.pos += entity.vel;
        if entity.spin != 0.0 {
            entity.angle = normalize_degrees(entity.angle + entity.spin);
        }
        wrap(entity, width, height);
    }
}

/// Once the bounding box has completely left through one edge, place it
/// just outside the opposite edge. Axes are handled independently.
pub fn wrap(entity: &mut Entity, width: f32, height: f32) {
    let half = entity.half_extent();
    let Vec2 { x, y } = entity.pos;

    if y - half.y > height {
        entity.pos.y = -half.y;
    } else if y + half.y < 0.0 {
        entity.pos.y = height + half.y;
    }

    if x - half.x > width {
        entity.pos.x = -half.x;
    } else if x + half.x < 0.0 {
        entity.pos.x = width + half.x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{AsteroidSize, Body};

    const W: f32 = 1024.0;
    const H: f32 = 768.0;

    fn small_rock(pos: Vec2, vel: Vec2) -> Entity {
        Entity::new(
            Body::Asteroid {
                size: AsteroidSize::Small,
            },
            pos,
        )
        .with_velocity(vel)
    }

    #[test]
    fn test_step_adds_velocity_and_spin() {
        let mut reg = Registry::new();
        let mut events = Vec::new();
        let id = reg.insert(
            small_rock(Vec2::new(100.0, 100.0), Vec2::new(1.5, -2.0)).with_spin(-1.0),
            &mut events,
        );

        step(&mut reg, W, H);
        let e = reg.get(id).unwrap();
        assert_eq!(e.pos, Vec2::new(101.5, 98.0));
        assert_eq!(e.angle, 359.0);
    }

    #[test]
    fn test_exit_right_reappears_left() {
        // half extent of a small rock is 12
        let mut e = small_rock(Vec2::new(W + 12.5, 300.0), Vec2::ZERO);
        wrap(&mut e, W, H);
        assert_eq!(e.pos, Vec2::new(-12.0, 300.0));
    }

    #[test]
    fn test_exit_top_reappears_bottom() {
        let mut e = small_rock(Vec2::new(200.0, -12.5), Vec2::ZERO);
        wrap(&mut e, W, H);
        assert_eq!(e.pos, Vec2::new(200.0, H + 12.0));
    }

    #[test]
    fn test_partially_visible_does_not_wrap() {
        let mut e = small_rock(Vec2::new(W + 5.0, -5.0), Vec2::ZERO);
        wrap(&mut e, W, H);
        assert_eq!(e.pos, Vec2::new(W + 5.0, -5.0));
    }

    #[test]
    fn test_corner_exit_wraps_both_axes() {
        let mut e = small_rock(Vec2::new(-13.0, H + 13.0), Vec2::ZERO);
        wrap(&mut e, W, H);
        assert_eq!(e.pos, Vec2::new(W + 12.0, -12.0));
    }

    #[test]
    fn test_wrapped_entity_keeps_moving_back_into_view() {
        let mut reg = Registry::new();
        let mut events = Vec::new();
        let id = reg.insert(small_rock(Vec2::new(W + 11.0, 50.0), Vec2::new(2.0, 0.0)), &mut events);

        step(&mut reg, W, H); // now fully off the right edge
        assert_eq!(reg.get(id).unwrap().pos.x, -12.0);
        step(&mut reg, W, H);
        assert_eq!(reg.get(id).unwrap().pos.x, -10.0);
    }
}
