//! Browser showcase for the `ui_kit` component family.
//!
//! Every table mode (local paging, server paging, loading, empty) and each companion component
//! is mounted on one page against deterministic invoice fixtures.

mod gallery;
mod invoices;

pub use gallery::ShowcaseApp;
pub use invoices::{sample_invoices, server_page, Invoice, InvoiceStatus};

use ui_kit::UiKitSettings;

/// Kit settings used by the showcase.
pub fn showcase_settings() -> UiKitSettings {
    UiKitSettings {
        items_per_page: 10,
        per_page_options: vec![5, 10, 20, 50],
        empty_title: "Nothing to show".to_string(),
        ..UiKitSettings::default()
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    // A missing stylesheet is already logged; the page still mounts unstyled.
    let _ = ui_kit::register_styles(&showcase_settings());
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn showcase_settings_are_valid() {
        let settings = showcase_settings();
        assert_eq!(settings.validate().ok(), Some(()));
        assert_eq!(settings.card_breakpoint_px, 768);
    }
}
