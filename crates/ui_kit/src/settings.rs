//! Kit-wide defaults shared by every component through the reactive context.

use leptos::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Defaults applied when a component prop is left unset.
pub struct UiKitSettings {
    /// Page size for tables that do not pass `items_per_page`.
    pub items_per_page: usize,
    /// Choices offered by the per-page selector.
    pub per_page_options: Vec<usize>,
    /// Viewport width below which tables switch to the card shape.
    pub card_breakpoint_px: u32,
    /// Title of the default empty state.
    pub empty_title: String,
    /// Lifetime of an alert before it dismisses itself.
    pub alert_duration_ms: u64,
    /// Hover delay before a tooltip appears.
    pub tooltip_delay_ms: u64,
    /// Quiet period after the last keystroke before a search query is reported.
    pub search_debounce_ms: u64,
}

impl Default for UiKitSettings {
    fn default() -> Self {
        Self {
            items_per_page: 20,
            per_page_options: vec![10, 20, 30, 50, 100],
            card_breakpoint_px: 768,
            empty_title: "No Record found".to_string(),
            alert_duration_ms: 5000,
            tooltip_delay_ms: 200,
            search_debounce_ms: 300,
        }
    }
}

#[derive(Debug, Error)]
/// Reasons a settings payload is rejected.
pub enum SettingsError {
    /// The payload is not valid settings JSON.
    #[error("settings payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// `items_per_page` was zero.
    #[error("items_per_page must be at least 1")]
    ZeroItemsPerPage,
    /// `per_page_options` was empty.
    #[error("per_page_options must not be empty")]
    NoPerPageOptions,
    /// `per_page_options` contained zero.
    #[error("per_page_options must not contain 0")]
    ZeroPerPageOption,
}

impl UiKitSettings {
    /// Parses and validates a JSON settings payload. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON and a validation variant for values
    /// no component can honor.
    pub fn from_json(raw: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(raw)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the invariants components rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.items_per_page == 0 {
            return Err(SettingsError::ZeroItemsPerPage);
        }
        if self.per_page_options.is_empty() {
            return Err(SettingsError::NoPerPageOptions);
        }
        if self.per_page_options.contains(&0) {
            return Err(SettingsError::ZeroPerPageOption);
        }
        Ok(())
    }
}

/// Installs `settings` for every descendant component. Invalid settings are logged and replaced
/// by the defaults.
pub fn provide_ui_kit_settings(settings: UiKitSettings) {
    let settings = match settings.validate() {
        Ok(()) => settings,
        Err(err) => {
            logging::warn!("ui kit settings rejected: {err}");
            UiKitSettings::default()
        }
    };
    provide_context(settings);
}

/// Returns the installed settings, or the defaults when none were provided.
pub fn use_ui_kit_settings() -> UiKitSettings {
    use_context::<UiKitSettings>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings = UiKitSettings::from_json(r#"{ "items_per_page": 50 }"#)
            .expect("valid settings");
        assert_eq!(
            settings,
            UiKitSettings {
                items_per_page: 50,
                ..UiKitSettings::default()
            }
        );
    }

    #[test]
    fn search_debounce_defaults_and_overrides() {
        assert_eq!(UiKitSettings::default().search_debounce_ms, 300);
        let settings = UiKitSettings::from_json(r#"{ "search_debounce_ms": 150 }"#)
            .expect("valid settings");
        assert_eq!(settings.search_debounce_ms, 150);
        assert_eq!(settings.items_per_page, 20);
    }

    #[test]
    fn invalid_payloads_are_rejected() {
        assert!(matches!(
            UiKitSettings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
        assert!(matches!(
            UiKitSettings::from_json(r#"{ "items_per_page": 0 }"#),
            Err(SettingsError::ZeroItemsPerPage)
        ));
        assert!(matches!(
            UiKitSettings::from_json(r#"{ "per_page_options": [] }"#),
            Err(SettingsError::NoPerPageOptions)
        ));
        assert!(matches!(
            UiKitSettings::from_json(r#"{ "per_page_options": [10, 0] }"#),
            Err(SettingsError::ZeroPerPageOption)
        ));
    }

    #[test]
    fn context_falls_back_to_defaults_and_rejects_invalid_values() {
        let runtime = create_runtime();
        assert_eq!(use_ui_kit_settings(), UiKitSettings::default());

        provide_ui_kit_settings(UiKitSettings {
            items_per_page: 0,
            ..UiKitSettings::default()
        });
        assert_eq!(use_ui_kit_settings().items_per_page, 20);

        provide_ui_kit_settings(UiKitSettings {
            tooltip_delay_ms: 500,
            ..UiKitSettings::default()
        });
        assert_eq!(use_ui_kit_settings().tooltip_delay_ms, 500);
        runtime.dispose();
    }
}
