//! Drives the backdrop through its public API against an in-memory surface.

// Test target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use brownian_backdrop::components::backdrop::{
	BackdropConfig, BackdropState, FrameRequest, MotionMode, Painter, SeededRandom, SurfaceHost,
	Theme,
};

/// Counts draw calls and remembers the element-side settings.
#[derive(Default)]
struct Surface {
	size: (f64, f64),
	ratio: f64,
	buffer: (u32, u32),
	scale: f64,
	clears: usize,
	lines: usize,
	curves: usize,
	circles: usize,
	strokes: usize,
}

impl Surface {
	fn new(width: f64, height: f64) -> Self {
		Self {
			size: (width, height),
			ratio: 1.0,
			..Self::default()
		}
	}
}

impl Painter for Surface {
	fn clear_rect(&mut self, _: f64, _: f64, _: f64, _: f64) {
		self.clears += 1;
	}
	fn begin_path(&mut self) {}
	fn move_to(&mut self, _: f64, _: f64) {}
	fn line_to(&mut self, _: f64, _: f64) {
		self.lines += 1;
	}
	fn quadratic_curve_to(&mut self, _: f64, _: f64, _: f64, _: f64) {
		self.curves += 1;
	}
	fn circle(&mut self, _: f64, _: f64, _: f64) {
		self.circles += 1;
	}
	fn stroke(&mut self) {
		self.strokes += 1;
	}
	fn fill(&mut self) {}
	fn set_stroke_style(&mut self, _: &str) {}
	fn set_fill_style(&mut self, _: &str) {}
	fn set_line_width(&mut self, _: f64) {}
	fn set_line_cap(&mut self, _: &str) {}
	fn set_line_join(&mut self, _: &str) {}
}

impl SurfaceHost for Surface {
	fn container_size(&self) -> (f64, f64) {
		self.size
	}
	fn device_pixel_ratio(&self) -> f64 {
		self.ratio
	}
	fn set_buffer_size(&mut self, width: u32, height: u32) {
		self.buffer = (width, height);
	}
	fn set_display_size(&mut self, _: f64, _: f64) {}
	fn set_pixel_scale(&mut self, ratio: f64) {
		self.scale = ratio;
	}
}

fn in_extended_bounds(state: &BackdropState<SeededRandom>) -> bool {
	let (w, h) = (state.surface.width, state.surface.height);
	state
		.particles
		.particles
		.iter()
		.all(|p| (-10.0..=w + 10.0).contains(&p.x) && (-10.0..=h + 10.0).contains(&p.y))
}

#[test]
fn animated_backdrop_reveals_paths_over_five_seconds() {
	let mut surface = Surface::new(800.0, 600.0);
	surface.ratio = 2.0;
	let mut state = BackdropState::new(
		Theme::emerald(),
		MotionMode::Animating,
		&mut surface,
		SeededRandom::new(99),
	);
	assert_eq!(surface.buffer, (1600, 1200));
	assert_eq!(surface.scale, 2.0);

	for frame in 1..=300 {
		assert_eq!(state.frame(&mut surface), FrameRequest::Next);
		assert!(in_extended_bounds(&state), "frame {frame}");
	}
	assert_eq!(surface.clears, 300);
	assert!(state.paths.iter().all(|p| p.progress() == 1.0));
	// 90 particles, glow + core each
	assert_eq!(surface.circles, 300 * 180);
}

#[test]
fn resize_scenario_resets_reveal_and_rebounds_particles() {
	let mut surface = Surface::new(800.0, 600.0);
	let mut state = BackdropState::new(
		Theme::emerald(),
		MotionMode::Animating,
		&mut surface,
		SeededRandom::new(5),
	);
	for _ in 0..120 {
		state.frame(&mut surface);
	}
	assert!(state.paths.iter().all(|p| p.progress() > 0.0));

	surface.size = (400.0, 300.0);
	state.resize(&mut surface);

	assert_eq!(surface.buffer, (400, 300));
	assert!(state.paths.iter().all(|p| p.progress() == 0.0));
	assert!(in_extended_bounds(&state));
	assert!(
		state
			.particles
			.particles
			.iter()
			.all(|p| p.x < 400.0 && p.y < 300.0)
	);
}

#[test]
fn reduced_motion_renders_one_complete_frame() {
	let config = BackdropConfig::from_json(r#"{"reducedMotion": true, "particleCount": 12}"#)
		.expect("valid config");
	let mode = MotionMode::from_reduced_motion(config.reduced_motion.unwrap_or(false));
	let mut surface = Surface::new(1024.0, 480.0);
	let mut state = BackdropState::new(config.theme(), mode, &mut surface, SeededRandom::new(8));

	assert_eq!(state.frame(&mut surface), FrameRequest::Done);
	assert!(state.paths.iter().all(|p| p.progress() == 1.0));
	assert_eq!(surface.clears, 0);
	assert_eq!(surface.circles, 24);
	// 398 interior curves per 400-point path
	assert_eq!(surface.curves, 2 * 398);

	let strokes = surface.strokes;
	assert_eq!(state.frame(&mut surface), FrameRequest::Done);
	assert_eq!(surface.strokes, strokes);
}
