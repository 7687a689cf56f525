//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use particle_field::{App, init_logging};

fn main() {
	init_logging();

	mount_to_body(|| {
		view! {
			<App>
				<main id="home" class="portfolio" />
			</App>
		}
	})
}
