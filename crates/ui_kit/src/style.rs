//! Stylesheet registration.
//!
//! Components only emit `ui-*` classes and `data-ui-*` tokens. The rules those tokens need beyond
//! an application's own theme (skeleton keyframes, the table/card breakpoint, alert stacking
//! transitions) live in one `<style>` element installed by [`register_styles`].

use thiserror::Error;

use crate::settings::UiKitSettings;

/// Id of the `<style>` element owned by the kit.
pub const STYLE_ELEMENT_ID: &str = "ui-kit-styles";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Stylesheet registration failures.
pub enum StyleError {
    /// No `window` global, e.g. outside a browser.
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// The document has no `<head>`.
    #[error("document has no head element")]
    NoHead,
    /// A DOM call threw.
    #[error("DOM call rejected: {0}")]
    Dom(String),
}

const BASE_RULES: &str = r#"
@keyframes ui-kit-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.45; } }
@keyframes ui-kit-wave { 0% { background-position: -200% 0; } 100% { background-position: 200% 0; } }
@keyframes ui-kit-spin { to { transform: rotate(360deg); } }
.ui-skeleton { display: block; background-color: #e5e7eb; border-radius: 0.25rem; }
.ui-skeleton[data-ui-intensity="light"] { background-color: #f3f4f6; }
.ui-skeleton[data-ui-intensity="dark"] { background-color: #d1d5db; }
.ui-skeleton[data-ui-variant="circular"], .ui-skeleton[data-ui-variant="avatar"] { border-radius: 9999px; }
.ui-skeleton[data-ui-variant="rounded"], .ui-skeleton[data-ui-variant="card"] { border-radius: 0.75rem; }
.ui-skeleton[data-ui-variant="button"] { border-radius: 9999px; }
.ui-skeleton[data-ui-variant="rectangular"] { border-radius: 0; }
.ui-skeleton[data-ui-animation="pulse"] { animation: ui-kit-pulse 1.5s ease-in-out infinite; }
.ui-skeleton[data-ui-animation="wave"], .ui-skeleton[data-ui-shimmer="true"] {
  background-image: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.6), transparent);
  background-size: 200% 100%;
  animation: ui-kit-wave 1.6s linear infinite;
}
[data-ui-slot="skeleton-stack"] { display: flex; flex-direction: column; gap: 0.5rem; }
.ui-button [data-ui-slot="spinner"] { width: 1em; height: 1em; animation: ui-kit-spin 1s linear infinite; }
.ui-tooltip { position: relative; display: inline-flex; }
.ui-tooltip [data-ui-slot="bubble"] { position: absolute; z-index: 60; white-space: nowrap; pointer-events: none; }
.ui-tooltip [data-ui-placement="top"] { bottom: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.ui-tooltip [data-ui-placement="bottom"] { top: calc(100% + 6px); left: 50%; transform: translateX(-50%); }
.ui-tooltip [data-ui-placement="left"] { right: calc(100% + 6px); top: 50%; transform: translateY(-50%); }
.ui-tooltip [data-ui-placement="right"] { left: calc(100% + 6px); top: 50%; transform: translateY(-50%); }
.ui-row-action-menu-surface { position: absolute; z-index: 70; width: 192px; max-height: 300px; overflow-y: auto; }
.ui-modal { position: fixed; inset: 0; z-index: 80; display: flex; }
.ui-modal [data-ui-slot="overlay"] { position: absolute; inset: 0; background: rgba(17, 24, 39, 0.5); }
.ui-modal [data-ui-slot="panel"] { position: relative; margin: auto; width: 100%; }
.ui-modal[data-ui-position="left"] [data-ui-slot="panel"] { margin: 0 auto 0 0; height: 100%; }
.ui-modal[data-ui-position="right"] [data-ui-slot="panel"] { margin: 0 0 0 auto; height: 100%; }
.ui-modal[data-ui-size="xs"] [data-ui-slot="panel"] { max-width: 20rem; }
.ui-modal[data-ui-size="sm"] [data-ui-slot="panel"] { max-width: 24rem; }
.ui-modal[data-ui-size="md"] [data-ui-slot="panel"] { max-width: 32rem; }
.ui-modal[data-ui-size="lg"] [data-ui-slot="panel"] { max-width: 42rem; }
.ui-modal[data-ui-size="xl"] [data-ui-slot="panel"] { max-width: 56rem; }
.ui-modal[data-ui-size="xxl"] [data-ui-slot="panel"] { max-width: 72rem; }
.ui-modal[data-ui-size="full"] [data-ui-slot="panel"] { max-width: none; height: 100%; }
.ui-alert-stack { position: fixed; top: 1rem; right: 1rem; }
.ui-alert { position: absolute; right: 0; width: 22rem; transition: opacity 300ms ease, transform 300ms ease; }
.ui-alert[data-ui-state="leaving"] { opacity: 0; transform: translateX(1rem); }
.ui-alert [data-ui-slot="progress"] { height: 3px; transition: width 100ms linear; }
.ui-data-table th[data-ui-sortable="true"] { cursor: pointer; user-select: none; }
.ui-data-table tr[data-ui-interactive="true"] { cursor: pointer; }
.ui-input [data-ui-slot="field"], .ui-search { position: relative; }
.ui-input [data-ui-slot="icon"], .ui-search [data-ui-slot="icon"] { position: absolute; top: 50%; transform: translateY(-50%); pointer-events: none; }
.ui-input [data-ui-position="left"], .ui-search [data-ui-slot="icon"] { left: 0.75rem; }
.ui-input [data-ui-position="right"] { right: 0.75rem; }
.ui-input textarea { resize: none; }
.ui-select-button { position: relative; display: inline-block; }
.ui-select-button [data-ui-slot="options"] { position: absolute; z-index: 70; width: 100%; max-height: 15rem; overflow-y: auto; margin: 0.25rem 0 0; padding: 0.25rem; list-style: none; }
.ui-select-button [data-ui-slot="option"][aria-disabled="true"] { opacity: 0.5; cursor: not-allowed; }
"#;

/// Full stylesheet text for `settings`.
pub fn stylesheet(settings: &UiKitSettings) -> String {
    let breakpoint = settings.card_breakpoint_px;
    let below = breakpoint.saturating_sub(1);
    format!(
        "{BASE_RULES}\
@media (max-width: {below}px) {{\n  \
.ui-data-table [data-ui-slot=\"table-shape\"] {{ display: none; }}\n}}\n\
@media (min-width: {breakpoint}px) {{\n  \
.ui-data-table[data-ui-layout=\"responsive\"] [data-ui-slot=\"card-shape\"] {{ display: none; }}\n}}\n"
    )
}

/// Installs the kit stylesheet into the document head. Calling it again replaces nothing and
/// returns `Ok`.
///
/// # Errors
///
/// Returns a [`StyleError`] when there is no browser document to install into or a DOM call
/// fails. Failures are also logged, so callers may ignore the result.
pub fn register_styles(settings: &UiKitSettings) -> Result<(), StyleError> {
    let result = install(settings);
    if let Err(err) = &result {
        leptos::logging::warn!("ui kit stylesheet not registered: {err}");
    }
    result
}

fn install(settings: &UiKitSettings) -> Result<(), StyleError> {
    let window = web_sys::window().ok_or(StyleError::NoWindow)?;
    let document = window.document().ok_or(StyleError::NoDocument)?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or(StyleError::NoHead)?;
    let style = document
        .create_element("style")
        .map_err(|err| StyleError::Dom(format!("{err:?}")))?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(&stylesheet(settings)));
    head.append_child(&style)
        .map_err(|err| StyleError::Dom(format!("{err:?}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_uses_configured_breakpoint() {
        let css = stylesheet(&UiKitSettings {
            card_breakpoint_px: 900,
            ..UiKitSettings::default()
        });
        assert!(css.contains("@media (max-width: 899px)"));
        assert!(css.contains("@media (min-width: 900px)"));
        assert!(css.contains("@keyframes ui-kit-pulse"));
        assert!(css.contains("@keyframes ui-kit-wave"));
        assert!(css.contains(".ui-select-button [data-ui-slot=\"options\"]"));
    }

    #[test]
    fn default_stylesheet_toggles_both_table_shapes() {
        let css = stylesheet(&UiKitSettings::default());
        assert!(css.contains("@media (max-width: 767px)"));
        assert!(css.contains("[data-ui-slot=\"table-shape\"] { display: none; }"));
        assert!(css.contains("[data-ui-slot=\"card-shape\"] { display: none; }"));
    }
}
