//! Leptos component wrapping the particle background canvas.
//!
//! The canvas is fixed to the viewport underneath all other content and
//! ignores pointer events. Once it is in the DOM a [`FrameLoop`] takes over;
//! the loop is stopped when the component's owner is cleaned up.

use leptos::prelude::*;
use log::debug;
use web_sys::HtmlCanvasElement;

use super::config::FieldConfig;
use super::frame_loop::FrameLoop;

const CANVAS_STYLE: &str = "position: fixed; inset: 0; pointer-events: none; z-index: 0; \
	opacity: 0.4; will-change: transform;";

/// Renders the animated particle network behind the page.
///
/// Needs no props. Pass `config` to override the stock look.
#[component]
pub fn ParticleBackground(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let running = StoredValue::new_local(None::<FrameLoop>);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let frame_loop = FrameLoop::mount(canvas, config.clone().unwrap_or_default());
		if let Some(ref fl) = frame_loop {
			debug!("particle-field: mounted with {} particles", fl.particle_count());
		}
		running.update_value(|slot| {
			if let Some(mut previous) = slot.take() {
				previous.stop();
			}
			*slot = frame_loop;
		});
	});

	on_cleanup(move || {
		running.update_value(|slot| {
			if let Some(mut fl) = slot.take() {
				fl.stop();
			}
		});
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-background"
			aria-hidden="true"
			style=CANVAS_STYLE
		/>
	}
}
