//! Visual theming for the backdrop.
//!
//! Holds colours plus every tunable constant of the particle field, the
//! proximity links and the Brownian paths.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle field configuration.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	/// Number of particles (fixed for the lifetime of the field)
	pub count: usize,
	/// Red channel shared by every particle
	pub red: u8,
	/// Green channel range, `[min, max)`
	pub green: (u8, u8),
	/// Blue channel range, `[min, max)`
	pub blue: (u8, u8),
	/// Core dot radius range
	pub radius: (f64, f64),
	/// Core dot opacity range
	pub alpha: (f64, f64),
	/// Width of the initial velocity range, centred on zero
	pub speed: f64,
	/// Standard deviation of the per-frame velocity kick
	pub jitter: f64,
	/// Per-frame velocity decay
	pub damping: f64,
	/// Distance outside the surface at which particles wrap
	pub margin: f64,
	/// Glow radius as a multiple of the core radius
	pub glow_radius: f64,
	/// Glow opacity as a multiple of the core opacity
	pub glow_alpha: f64,
}

/// Proximity link configuration.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Pairs closer than this are joined
	pub distance: f64,
	/// Opacity of a link between coincident particles
	pub max_opacity: f64,
	pub color: Color,
	pub width: f64,
}

/// Style of one Brownian path.
#[derive(Clone, Debug)]
pub struct PathStyle {
	pub color: Color,
	pub width: f64,
	/// Drift coefficient
	pub mu: f64,
	/// Volatility coefficient
	pub sigma: f64,
	/// Band centre as a fraction of surface height
	pub start_y: f64,
}

/// Generation and reveal parameters shared by all paths.
#[derive(Clone, Debug)]
pub struct RevealStyle {
	/// Points per path
	pub steps: usize,
	/// Initial value of every simulated sequence
	pub start_price: f64,
	/// Band height as a fraction of surface height
	pub band: f64,
	/// Frames needed to reveal a whole path
	pub duration: u32,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub particles: ParticleStyle,
	pub links: LinkStyle,
	pub paths: Vec<PathStyle>,
	pub reveal: RevealStyle,
}

impl Theme {
	/// Green particles over two green price paths (default)
	pub fn emerald() -> Self {
		Self {
			name: "emerald",
			particles: ParticleStyle {
				count: 90,
				red: 52,
				green: (180, 220),
				blue: (120, 160),
				radius: (1.5, 3.5),
				alpha: (0.15, 0.35),
				speed: 0.3,
				jitter: 0.04,
				damping: 0.98,
				margin: 10.0,
				glow_radius: 3.0,
				glow_alpha: 0.15,
			},
			links: LinkStyle {
				distance: 130.0,
				max_opacity: 0.07,
				color: Color::rgb(52, 211, 153),
				width: 0.6,
			},
			paths: vec![
				PathStyle {
					color: Color::rgba(52, 211, 153, 0.40),
					width: 2.5,
					mu: 0.0002,
					sigma: 0.012,
					start_y: 0.55,
				},
				PathStyle {
					color: Color::rgba(16, 185, 129, 0.30),
					width: 2.0,
					mu: -0.0001,
					sigma: 0.015,
					start_y: 0.35,
				},
			],
			reveal: RevealStyle {
				steps: 400,
				start_price: 100.0,
				band: 0.35,
				duration: 300,
			},
		}
	}

	/// Muted blue-grey variant for light pages
	pub fn slate() -> Self {
		let emerald = Self::emerald();
		Self {
			name: "slate",
			particles: ParticleStyle {
				red: 94,
				green: (120, 150),
				blue: (160, 190),
				..emerald.particles
			},
			links: LinkStyle {
				color: Color::rgb(100, 130, 160),
				..emerald.links
			},
			paths: vec![
				PathStyle {
					color: Color::rgba(94, 129, 172, 0.40),
					..emerald.paths[0].clone()
				},
				PathStyle {
					color: Color::rgba(129, 161, 193, 0.30),
					..emerald.paths[1].clone()
				},
			],
			reveal: emerald.reveal,
		}
	}

	/// Look up a preset by name.
	pub fn by_name(name: &str) -> Option<Self> {
		match name {
			"emerald" => Some(Self::emerald()),
			"slate" => Some(Self::slate()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::emerald()
	}
}
