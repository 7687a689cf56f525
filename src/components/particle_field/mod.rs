//! Ambient particle network background.
//!
//! Draws a field of slowly drifting points on an HTML canvas with:
//! - Reflective viewport edges
//! - Faint links between points closer than a fixed distance, stroked as one path
//! - A gentle pull toward the mouse pointer
//! - Crisp output on high-density displays
//!
//! The particle set is sized by viewport width and rebuilt from scratch on
//! every window resize.
//!
//! # Example
//!
//! ```ignore
//! use particle_field::ParticleBackground;
//!
//! view! {
//!     <ParticleBackground />
//!     <main class="content">...</main>
//! }
//! ```

mod animator;
mod component;
pub mod config;
mod frame_loop;
mod particles;
mod surface;
mod viewport;

pub use animator::Animator;
pub use component::ParticleBackground;
pub use config::{Color, FieldConfig};
pub use frame_loop::FrameLoop;
pub use particles::{Accent, Particle, ParticleField, Pointer};
pub use surface::{CanvasSurface, Surface};
pub use viewport::Viewport;
