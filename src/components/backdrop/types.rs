//! Page-level configuration overrides for the backdrop.

use log::warn;
use serde::Deserialize;

use super::theme::Theme;

/// Upper bound on particles; links are checked for every pair each frame.
pub const MAX_PARTICLES: usize = 90;

/// Optional overrides, usually embedded in the page as JSON.
///
/// Every field is optional; missing fields keep the theme's value.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackdropConfig {
	/// Theme preset name (e.g., "emerald" or "slate").
	pub theme: Option<String>,
	pub particle_count: Option<usize>,
	pub link_distance: Option<f64>,
	/// Points per Brownian path.
	pub path_steps: Option<usize>,
	/// Frames needed to fully reveal a path.
	pub reveal_frames: Option<u32>,
	/// Forces static (`true`) or animated (`false`) rendering regardless of
	/// the visitor's reduced-motion preference.
	pub reduced_motion: Option<bool>,
}

impl BackdropConfig {
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Resolve the theme preset and apply overrides on top of it.
	pub fn theme(&self) -> Theme {
		let mut theme = match self.theme.as_deref() {
			Some(name) => Theme::by_name(name).unwrap_or_else(|| {
				warn!("backdrop: unknown theme {name:?}, using default");
				Theme::default()
			}),
			None => Theme::default(),
		};

		if let Some(count) = self.particle_count {
			if count > MAX_PARTICLES {
				warn!("backdrop: particle count {count} clamped to {MAX_PARTICLES}");
			}
			theme.particles.count = count.min(MAX_PARTICLES);
		}
		if let Some(distance) = self.link_distance.filter(|d| d.is_finite() && *d > 0.0) {
			theme.links.distance = distance;
		}
		if let Some(steps) = self.path_steps {
			theme.reveal.steps = steps;
		}
		if let Some(frames) = self.reveal_frames {
			theme.reveal.duration = frames.max(1);
		}
		theme
	}
}
