//! Particle background drawn on a braille canvas.

use ratatui::{
    Frame,
    layout::Rect,
    symbols::Marker,
    widgets::canvas::{Canvas, Circle},
};

use crate::particles::ParticleField;
use crate::theme::Palette;

/// Cells per particle size unit when drawn as a circle.
const RADIUS_SCALE: f64 = 0.2;

/// Draws every particle over `area`. Canvas y grows upward, so rows flip.
pub fn render(frame: &mut Frame, area: Rect, field: &ParticleField, palette: &Palette) {
    let (width, height) = (field.width(), field.height());
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(palette.background)
        .x_bounds([0.0, width.max(1.0)])
        .y_bounds([0.0, height.max(1.0)])
        .paint(|ctx| {
            for particle in field.particles() {
                ctx.draw(&Circle {
                    x: particle.x,
                    y: height - particle.y,
                    radius: particle.size * RADIUS_SCALE,
                    color: palette.particle(particle.alpha),
                });
            }
        });

    frame.render_widget(canvas, area);
}
