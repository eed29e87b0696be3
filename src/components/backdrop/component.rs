//! Leptos component wrapping the backdrop canvas.
//!
//! The component creates a `<canvas>` sized to its parent container. On mount
//! it builds the backdrop state, subscribes to window resizes and, unless the
//! visitor prefers reduced motion, drives the state with
//! `requestAnimationFrame`.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::canvas::WebCanvas;
use super::random::BrowserRandom;
use super::state::{BackdropState, FrameRequest, MotionMode};
use super::types::BackdropConfig;

/// The animated state together with the canvas it draws on.
struct Backdrop {
	state: BackdropState<BrowserRandom>,
	canvas: WebCanvas,
}

impl Backdrop {
	fn frame(&mut self) -> FrameRequest {
		self.state.frame(&mut self.canvas)
	}

	fn resize(&mut self) {
		self.state.resize(&mut self.canvas);
	}
}

fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

/// Renders the particle and Brownian path backdrop on a canvas element.
///
/// The canvas fills its parent; give the parent a size and
/// `position: relative`. Without a 2D context the component stays inert.
#[component]
pub fn BackdropCanvas(
	/// Overrides for the theme and motion preference.
	#[prop(optional)]
	config: BackdropConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let backdrop: Rc<RefCell<Option<Backdrop>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			debug!("backdrop: no canvas mounted, staying inert");
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(mut surface) = WebCanvas::new(canvas) else {
			warn!("backdrop: canvas has no 2D context, staying inert");
			return;
		};

		let reduced = config
			.reduced_motion
			.unwrap_or_else(|| prefers_reduced_motion(&window));
		let mode = MotionMode::from_reduced_motion(reduced);
		let state = BackdropState::new(config.theme(), mode, &mut surface, BrowserRandom);
		info!(
			"backdrop: {:?} with {} particles and {} paths on {}x{}",
			mode,
			state.particles.particles.len(),
			state.paths.len(),
			state.surface.width,
			state.surface.height
		);
		*backdrop.borrow_mut() = Some(Backdrop {
			state,
			canvas: surface,
		});

		let backdrop_resize = backdrop.clone();
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut b) = *backdrop_resize.borrow_mut() {
				b.resize();
				// The frame loop is not running in static mode; redraw here.
				if b.state.mode() == MotionMode::Static {
					b.frame();
				}
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		if mode == MotionMode::Static {
			if let Some(ref mut b) = *backdrop.borrow_mut() {
				b.frame();
			}
			return;
		}

		let (backdrop_anim, animate_inner) = (backdrop.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let request = match *backdrop_anim.borrow_mut() {
				Some(ref mut b) => b.frame(),
				None => FrameRequest::Done,
			};
			if request == FrameRequest::Next {
				if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="backdrop-canvas"
			aria-hidden="true"
			style="display: block; position: absolute; inset: 0; pointer-events: none;"
		/>
	}
}
