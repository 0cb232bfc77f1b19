//! Inline SVG icon set used by the primitives.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named icons available to primitives and applications.
pub enum IconName {
    /// Left-pointing chevron.
    ChevronLeft,
    /// Right-pointing chevron.
    ChevronRight,
    /// Down-pointing chevron.
    ChevronDown,
    /// Close cross.
    Close,
    /// Vertical ellipsis for overflow menus.
    MoreVertical,
    /// Success check in a circle.
    CheckCircle,
    /// Error mark in a circle.
    AlertCircle,
    /// Warning triangle.
    AlertTriangle,
    /// Information mark.
    Info,
    /// Magnifying glass.
    Search,
    /// Plain check mark.
    Check,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Close => "close",
            Self::MoreVertical => "more-vertical",
            Self::CheckCircle => "check-circle",
            Self::AlertCircle => "alert-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::Info => "info",
            Self::Search => "search",
            Self::Check => "check",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::ChevronLeft => "M15 18l-6-6 6-6",
            Self::ChevronRight => "M9 18l6-6-6-6",
            Self::ChevronDown => "M6 9l6 6 6-6",
            Self::Close => "M18 6L6 18M6 6l12 12",
            Self::MoreVertical => "M12 5h.01M12 12h.01M12 19h.01",
            Self::CheckCircle => "M22 11.08V12a10 10 0 1 1-5.93-9.14M22 4L12 14.01l-3-3",
            Self::AlertCircle => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 8v4M12 16h.01",
            Self::AlertTriangle => {
                "M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0zM12 9v4M12 17h.01"
            }
            Self::Info => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zM12 16v-4M12 8h.01",
            Self::Search => "M11 3a8 8 0 1 0 0 16 8 8 0 0 0 0-16zM21 21l-4.35-4.35",
            Self::Check => "M20 6L9 17l-5-5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 24px.
    Lg,
}

impl IconSize {
    fn pixels(self) -> u8 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline icon.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            width=pixels
            height=pixels
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}
