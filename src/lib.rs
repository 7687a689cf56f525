//! particle-field: Ambient particle network background for a portfolio page.
//!
//! This crate provides a WASM canvas component that animates drifting,
//! interconnected points reacting to the mouse pointer, mounted beneath the
//! page content.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::particle_field::{FieldConfig, ParticleBackground};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("particle-field: logging initialized");
}

/// Parses a JSON field configuration; absent keys keep their defaults.
pub fn parse_field_config(json_text: &str) -> Result<FieldConfig, serde_json::Error> {
	serde_json::from_str(json_text)
}

/// Load configuration overrides from a script element with id="particle-config".
/// Returns `None` when the element is missing or its JSON is malformed.
pub fn load_field_config() -> Option<FieldConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_field_config(&json_text) {
		Ok(config) => {
			info!("particle-field: loaded configuration overrides");
			Some(config)
		}
		Err(e) => {
			warn!("particle-field: failed to parse configuration: {}", e);
			None
		}
	}
}

/// Main application component.
/// Mounts the particle background underneath the page content layer.
#[component]
pub fn App(children: Children) -> impl IntoView {
	provide_meta_context();

	let config = load_field_config().unwrap_or_default();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />
		<Title text="Portfolio" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ParticleBackground config=config />
		<div class="content-layer" style="position: relative; z-index: 1;">
			{children()}
		</div>
	}
}
