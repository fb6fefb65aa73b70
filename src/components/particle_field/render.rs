//! Canvas rendering for the particle backdrop.
//!
//! One call to [`draw_frame`] is one animation frame:
//! 1. Clear the surface
//! 2. Stroke links between nearby particles (positions before the step)
//! 3. Advance the simulation with the current pointer
//! 4. Fill every particle at its new position

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::{Link, ParticleField, Pointer};

/// Draws one frame and advances the field.
pub fn draw_frame(field: &mut ParticleField, ctx: &CanvasRenderingContext2d, pointer: Pointer) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	draw_links(field, ctx);
	field.step(pointer);
	draw_particles(field, ctx);
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	let config = field.config();
	ctx.set_line_width(config.link_width);

	for Link { a, b, opacity } in field.links() {
		let (pa, pb) = (&field.particles[a], &field.particles[b]);
		ctx.set_stroke_style_str(&config.link_color.with_alpha(opacity).to_css());
		ctx.begin_path();
		ctx.move_to(pa.x, pa.y);
		ctx.line_to(pb.x, pb.y);
		ctx.stroke();
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	for p in &field.particles {
		ctx.set_fill_style_str(&p.hue.color().to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}
