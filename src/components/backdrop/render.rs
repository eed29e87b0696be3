//! Drawing for the backdrop.
//!
//! Back to front:
//! 1. Proximity links between particles
//! 2. Particle glows and core dots
//! 3. Brownian paths, smoothed through midpoints

use super::canvas::Painter;
use super::particles::ParticleField;
use super::paths::PricePath;
use super::theme::{LinkStyle, ParticleStyle};

pub fn draw_links<P: Painter + ?Sized>(field: &ParticleField, style: &LinkStyle, painter: &mut P) {
	for link in field.links(style) {
		let (a, b) = (&field.particles[link.a], &field.particles[link.b]);
		painter.begin_path();
		painter.move_to(a.x, a.y);
		painter.line_to(b.x, b.y);
		painter.set_stroke_style(&style.color.with_alpha(link.opacity).to_css());
		painter.set_line_width(style.width);
		painter.stroke();
	}
}

pub fn draw_particles<P: Painter + ?Sized>(
	field: &ParticleField,
	style: &ParticleStyle,
	painter: &mut P,
) {
	for p in &field.particles {
		painter.begin_path();
		painter.circle(p.x, p.y, p.radius * style.glow_radius);
		painter.set_fill_style(&format!(
			"rgba({}, {}, {}, {})",
			style.red,
			p.green,
			p.blue,
			p.alpha * style.glow_alpha
		));
		painter.fill();

		painter.begin_path();
		painter.circle(p.x, p.y, p.radius);
		painter.set_fill_style(&format!(
			"rgba({}, {}, {}, {})",
			style.red, p.green, p.blue, p.alpha
		));
		painter.fill();
	}
}

/// Stroke the revealed part of a path.
///
/// Interior points act as quadratic control points with the midpoint to the
/// next point as the segment end; the last revealed point is reached with a
/// straight line so the curve ends exactly on it.
pub fn draw_path<P: Painter + ?Sized>(path: &PricePath, painter: &mut P) {
	let end = path.revealed_end();
	if end < 1 {
		return;
	}
	let points = &path.points;

	painter.begin_path();
	painter.move_to(points[0].x, points[0].y);
	for i in 1..end {
		let (p, next) = (points[i], points[i + 1]);
		painter.quadratic_curve_to(p.x, p.y, (p.x + next.x) / 2.0, (p.y + next.y) / 2.0);
	}
	painter.line_to(points[end].x, points[end].y);

	painter.set_stroke_style(&path.style.color.to_css());
	painter.set_line_width(path.style.width);
	painter.set_line_cap("round");
	painter.set_line_join("round");
	painter.stroke();
}
