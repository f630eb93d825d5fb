//! Random placement helpers

use glam::Vec2;
use rand::Rng;

use crate::wrap_coord;

/// Random on-screen point kept away from `reference`.
///
/// The x and y offsets from the reference always sum to at least `buffer`,
/// which keeps spawns off the ship without a real distance check. The
/// result is wrapped onto the screen, so `0 <= x < width` and
/// `0 <= y < height`.
pub fn random_coords<R: Rng + ?Sized>(
    rng: &mut R,
    buffer: u32,
    reference: Vec2,
    width: u32,
    height: u32,
) -> Vec2 {
    let x_min = if buffer > 0 { rng.random_range(0..buffer) } else { 0 };
    let y_min = buffer - x_min;

    let x_offset = offset_in(rng, x_min, width.saturating_sub(x_min));
    let y_offset = offset_in(rng, y_min, height.saturating_sub(y_min));

    Vec2::new(
        wrap_coord(reference.x + x_offset as f32, width as f32),
        wrap_coord(reference.y + y_offset as f32, height as f32),
    )
}

/// Uniform in [lo, hi), or `lo` when the range is empty
fn offset_in<R: Rng + ?Sized>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    if lo < hi { rng.random_range(lo..hi) } else { lo }
}

/// Random drift: each axis is `±speed * U[0,1)`
pub fn random_drift<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Vec2 {
    let mut axis = || {
        let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        sign * speed * rng.random::<f32>()
    };
    let dx = axis();
    let dy = axis();
    Vec2::new(dx, dy)
}
