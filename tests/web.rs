#![cfg(target_arch = "wasm32")]
#![allow(unused_crate_dependencies)]

use brownian_backdrop::components::backdrop::{BrowserRandom, UniformSource, WebCanvas};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_random_is_unit_interval() {
	let mut rng = BrowserRandom;
	for _ in 0..1_000 {
		let x = rng.next_f64();
		assert!((0.0..1.0).contains(&x));
	}
}

#[wasm_bindgen_test]
fn canvas_gets_a_2d_surface() {
	let document = web_sys::window().unwrap().document().unwrap();
	let canvas = document
		.create_element("canvas")
		.unwrap()
		.dyn_into::<web_sys::HtmlCanvasElement>()
		.unwrap();

	assert!(WebCanvas::new(canvas).is_some());
}
