//! County Atlas in the browser
//!
//! Compiled to WebAssembly and rendered client side. The county table and
//! the ranked population chart read two signal-backed stores; everything
//! that is not I/O or DOM (normalizing rows, ranking, the loading state
//! machine, table and chart models) is shared with the native crate.
//!
//! Data comes from the API base stored in `localStorage`, `/api/v1` when
//! unset, and can be changed on the settings page.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    console_error_panic_hook::set_once();

    web_sys::console::info_1(
        &format!(
            "County Atlas {} reading from {}",
            env!("CARGO_PKG_VERSION"),
            api::get_api_base()
        )
        .into(),
    );

    mount_to_body(app::App);
}
