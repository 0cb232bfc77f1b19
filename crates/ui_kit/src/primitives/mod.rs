//! Shared control, data-display, navigation, overlay, and placeholder primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconName, IconSize};

mod controls;
mod data_display;
mod forms;
mod navigation;
mod overlays;
pub mod placement;
pub mod skeleton;

pub use controls::{Button, SelectField};
pub use data_display::{Badge, Card, EmptyStateCard};
pub use forms::{Input, InputKind, Search, SelectButton, SelectOption};
pub use navigation::{Breadcrumb, BreadcrumbItem};
pub use overlays::{
    Modal, ModalPosition, ModalSize, RowAction, RowActionMenu, RowActionVariant, Tooltip,
    TooltipVariant,
};
pub use skeleton::{
    Dimension, Skeleton, SkeletonAnimation, SkeletonIntensity, SkeletonRows, SkeletonSize,
    SkeletonSpec, SkeletonText, SkeletonVariant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Brand-colored action.
    #[default]
    Primary,
    /// Secondary brand action.
    Secondary,
    /// High-contrast dark action.
    Dark,
    /// Low-emphasis neutral action.
    Neutral,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Dark => "dark",
            Self::Neutral => "neutral",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared sizing tokens for buttons, badges, and tooltips.
pub enum ControlSize {
    /// Dense.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl ControlSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the label a button icon sits on.
pub enum IconPosition {
    /// Before the label.
    #[default]
    Left,
    /// After the label.
    Right,
}

impl IconPosition {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// HTML `type` of a button.
pub enum ButtonType {
    /// Plain button.
    #[default]
    Button,
    /// Form submit.
    Submit,
    /// Form reset.
    Reset,
}

impl ButtonType {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Submit => "submit",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Semantic badge colors.
pub enum BadgeVariant {
    /// Neutral gray.
    #[default]
    Default,
    /// Secondary accent.
    Secondary,
    /// Success.
    Success,
    /// Warning.
    Warning,
    /// Error.
    Error,
    /// Informational.
    Info,
}

impl BadgeVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Shared padding tokens.
pub enum LayoutPadding {
    /// No padding.
    None,
    /// Compact padding.
    Sm,
    /// Default padding.
    #[default]
    Md,
    /// Spacious padding.
    Lg,
}

impl LayoutPadding {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Copyable read handle over a prop that may be static or reactive.
pub(crate) fn tracked<T: Clone + 'static>(value: MaybeSignal<T>) -> Signal<T> {
    Signal::derive(move || value.get())
}

/// Enter and Space activate role="button" elements that are not native buttons.
pub(crate) fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}
