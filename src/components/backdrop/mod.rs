//! Animated hero backdrop.
//!
//! Renders a decorative background on an HTML canvas with:
//! - A drifting particle field (damped Brownian velocities, toroidal wrap)
//! - Faint links between every pair of nearby particles
//! - Geometric Brownian motion paths drawn in progressively as smooth curves
//! - A single static frame when the visitor prefers reduced motion
//!
//! The engine itself ([`BackdropState`]) only talks to the page through the
//! [`Painter`] and [`SurfaceHost`] traits, so it can run against any drawing
//! target.
//!
//! # Example
//!
//! ```ignore
//! use brownian_backdrop::{BackdropCanvas, BackdropConfig};
//!
//! view! {
//!     <section class="hero">
//!         <BackdropCanvas config=BackdropConfig::default() />
//!     </section>
//! }
//! ```

pub mod canvas;
mod component;
pub mod particles;
pub mod paths;
pub mod random;
mod render;
pub mod state;
pub mod surface;
pub mod theme;
mod types;

pub use canvas::{Painter, SurfaceHost, WebCanvas};
pub use component::BackdropCanvas;
pub use random::{BrowserRandom, SeededRandom, UniformSource};
pub use state::{BackdropState, FrameRequest, MotionMode};
pub use theme::Theme;
pub use types::{BackdropConfig, MAX_PARTICLES};
