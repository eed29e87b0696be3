//! brownian-backdrop: animated hero background for a static home page.
//!
//! This crate provides a WASM-based canvas component that renders drifting,
//! softly linked particles beneath progressively drawn geometric Brownian
//! motion paths, with a static fallback for reduced-motion visitors.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::backdrop::{BackdropCanvas, BackdropConfig, BackdropState, Theme};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("backdrop: logging initialized");
}

/// Load overrides from a script element with id="backdrop-config".
/// Expected format: JSON such as { "theme": "slate", "particleCount": 60 }
fn load_config() -> Option<BackdropConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("backdrop-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BackdropConfig::from_json(&json_text) {
		Ok(config) => {
			info!("backdrop: loaded page config {:?}", config);
			Some(config)
		}
		Err(e) => {
			warn!("backdrop: failed to parse page config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads page overrides from the DOM and renders the hero with its backdrop.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Home" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<section class="hero" style="position: relative; min-height: 100vh; overflow: hidden;">
			<BackdropCanvas config=config />
			<div class="hero__content" style="position: relative;">
				<h1>"Stochastic Processes & Quantitative Finance"</h1>
				<p class="subtitle">"Research, publications and teaching."</p>
			</div>
		</section>
	}
}
