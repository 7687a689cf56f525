//! Browser wiring for the animator.
//!
//! A [`FrameLoop`] owns the `requestAnimationFrame` callback and both window
//! listeners (`mousemove`, `resize`). Stopping or dropping it cancels the
//! pending frame, removes the listeners and stops the animator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, Window};

use super::animator::Animator;
use super::config::FieldConfig;
use super::surface::CanvasSurface;
use super::viewport::Viewport;

const POINTER_EVENT: &str = "mousemove";
const RESIZE_EVENT: &str = "resize";

/// Animator and the surface it draws to, shared between callbacks.
struct Scene {
	animator: Animator,
	surface: CanvasSurface,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A running background animation bound to one canvas.
pub struct FrameLoop {
	window: Window,
	scene: Rc<RefCell<Scene>>,
	frame_id: Rc<Cell<Option<i32>>>,
	on_frame: FrameCallback,
	on_pointer: Option<Closure<dyn FnMut(MouseEvent)>>,
	on_resize: Option<Closure<dyn FnMut()>>,
}

fn browser_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

impl FrameLoop {
	/// Starts animating `canvas`.
	///
	/// Returns `None`, having touched nothing, if there is no window, no 2D
	/// context or no readable viewport.
	pub fn mount(canvas: HtmlCanvasElement, config: FieldConfig) -> Option<Self> {
		let window = web_sys::window()?;
		let mut surface = CanvasSurface::acquire(canvas)?;
		let viewport = Viewport::of_window(&window)?;

		let rng = SmallRng::seed_from_u64(config.seed.unwrap_or_else(browser_seed));
		let animator = Animator::start(config, viewport, rng, &mut surface);
		let scene = Rc::new(RefCell::new(Scene { animator, surface }));

		let scene_pointer = scene.clone();
		let on_pointer = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			scene_pointer
				.borrow_mut()
				.animator
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64);
		});

		let scene_resize = scene.clone();
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(viewport) = web_sys::window().as_ref().and_then(Viewport::of_window) else {
				return;
			};
			let Scene { animator, surface } = &mut *scene_resize.borrow_mut();
			animator.resize(viewport, surface);
		});

		let passive = AddEventListenerOptions::new();
		passive.set_passive(true);
		let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
			POINTER_EVENT,
			on_pointer.as_ref().unchecked_ref(),
			&passive,
		);
		let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
			RESIZE_EVENT,
			on_resize.as_ref().unchecked_ref(),
			&passive,
		);

		let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let on_frame: FrameCallback = Rc::new(RefCell::new(None));
		let (scene_anim, frame_id_anim, on_frame_anim) =
			(scene.clone(), frame_id.clone(), on_frame.clone());
		*on_frame.borrow_mut() = Some(Closure::new(move || {
			frame_id_anim.set(None);
			let again = {
				let Scene { animator, surface } = &mut *scene_anim.borrow_mut();
				animator.frame(surface)
			};
			if !again {
				return;
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), &*on_frame_anim.borrow()) {
				frame_id_anim.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
			}
		}));
		if let Some(ref cb) = *on_frame.borrow() {
			frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Some(Self {
			window,
			scene,
			frame_id,
			on_frame,
			on_pointer: Some(on_pointer),
			on_resize: Some(on_resize),
		})
	}

	/// Number of particles currently alive.
	pub fn particle_count(&self) -> usize {
		self.scene.borrow().animator.field().len()
	}

	/// Cancels the pending frame and detaches both listeners. Idempotent.
	pub fn stop(&mut self) {
		if let Some(id) = self.frame_id.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		if let Some(cb) = self.on_pointer.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback(POINTER_EVENT, cb.as_ref().unchecked_ref());
		}
		if let Some(cb) = self.on_resize.take() {
			let _ = self
				.window
				.remove_event_listener_with_callback(RESIZE_EVENT, cb.as_ref().unchecked_ref());
		}
		// The frame closure holds a handle to its own slot; clearing it breaks the cycle.
		self.on_frame.borrow_mut().take();
		self.scene.borrow_mut().animator.stop();
	}
}

impl Drop for FrameLoop {
	fn drop(&mut self) {
		self.stop();
	}
}
