//! Loading placeholders.
//!
//! Animations are keyframes from the stylesheet installed by [`crate::register_styles`]; nothing
//! here touches the document head.

use std::fmt;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Placeholder shape.
pub enum SkeletonVariant {
    /// A line of text.
    #[default]
    Text,
    /// Square-cornered block.
    Rectangular,
    /// Circle.
    Circular,
    /// Rounded block.
    Rounded,
    /// Card-sized block.
    Card,
    /// Small circle.
    Avatar,
    /// Button-sized pill.
    Button,
    /// Image block.
    Image,
    /// Hairline.
    Line,
}

impl SkeletonVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Rectangular => "rectangular",
            Self::Circular => "circular",
            Self::Rounded => "rounded",
            Self::Card => "card",
            Self::Avatar => "avatar",
            Self::Button => "button",
            Self::Image => "image",
            Self::Line => "line",
        }
    }

    fn default_dimensions(self) -> (&'static str, &'static str) {
        match self {
            Self::Text => ("100%", "1rem"),
            Self::Rectangular => ("100%", "8rem"),
            Self::Circular => ("3rem", "3rem"),
            Self::Rounded => ("100%", "6rem"),
            Self::Card => ("100%", "12rem"),
            Self::Avatar => ("2.5rem", "2.5rem"),
            Self::Button => ("5rem", "2.25rem"),
            Self::Image => ("100%", "10rem"),
            Self::Line => ("100%", "0.25rem"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Placeholder animation.
pub enum SkeletonAnimation {
    /// Opacity pulse.
    #[default]
    Pulse,
    /// Sweeping highlight.
    Wave,
    /// Static.
    None,
}

impl SkeletonAnimation {
    fn token(self) -> &'static str {
        match self {
            Self::Pulse => "pulse",
            Self::Wave => "wave",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Preset placeholder size.
pub enum SkeletonSize {
    /// 4rem x 1rem.
    Xs,
    /// 6rem x 1.25rem.
    Sm,
    /// 8rem x 1.5rem.
    Md,
    /// 12rem x 2rem.
    Lg,
    /// 16rem x 2.5rem.
    Xl,
}

impl SkeletonSize {
    fn dimensions(self) -> (&'static str, &'static str) {
        match self {
            Self::Xs => ("4rem", "1rem"),
            Self::Sm => ("6rem", "1.25rem"),
            Self::Md => ("8rem", "1.5rem"),
            Self::Lg => ("12rem", "2rem"),
            Self::Xl => ("16rem", "2.5rem"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Placeholder fill intensity.
pub enum SkeletonIntensity {
    /// Lightest fill.
    Light,
    /// Default fill.
    #[default]
    Medium,
    /// Darkest fill.
    Dark,
}

impl SkeletonIntensity {
    fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Dark => "dark",
        }
    }
}

/// Explicit placeholder length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dimension {
    /// Pixels.
    Px(u32),
    /// Any CSS length, e.g. `"60%"` or `"1.25rem"`.
    Css(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(pixels) => write!(f, "{pixels}px"),
            Self::Css(length) => f.write_str(length),
        }
    }
}

impl From<u32> for Dimension {
    fn from(pixels: u32) -> Self {
        Self::Px(pixels)
    }
}

impl From<&str> for Dimension {
    fn from(length: &str) -> Self {
        Self::Css(length.to_string())
    }
}

/// Resolved shape of one placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkeletonSpec {
    /// Shape.
    pub variant: SkeletonVariant,
    /// Preset size.
    pub size: Option<SkeletonSize>,
    /// Explicit width.
    pub width: Option<Dimension>,
    /// Explicit height.
    pub height: Option<Dimension>,
    /// Custom border radius.
    pub border_radius: Option<String>,
}

impl SkeletonSpec {
    /// Width and height. Explicit lengths beat the preset size, which beats the variant default.
    pub fn dimensions(&self) -> (String, String) {
        let (default_width, default_height) = self
            .size
            .map(SkeletonSize::dimensions)
            .unwrap_or_else(|| self.variant.default_dimensions());
        let width = self
            .width
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| default_width.to_string());
        let height = self
            .height
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_else(|| default_height.to_string());
        (width, height)
    }

    /// Inline style for the placeholder element.
    pub fn style(&self) -> String {
        let (width, height) = self.dimensions();
        match &self.border_radius {
            Some(radius) => format!("width: {width}; height: {height}; border-radius: {radius};"),
            None => format!("width: {width}; height: {height};"),
        }
    }
}

#[component]
/// Shape-configurable loading placeholder.
pub fn Skeleton(
    #[prop(default = SkeletonVariant::Text)] variant: SkeletonVariant,
    #[prop(default = SkeletonAnimation::Pulse)] animation: SkeletonAnimation,
    #[prop(default = SkeletonIntensity::Medium)] intensity: SkeletonIntensity,
    #[prop(optional)] size: Option<SkeletonSize>,
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(optional, into)] border_radius: Option<String>,
    #[prop(default = 1)] count: usize,
    #[prop(optional)] shimmer: bool,
    #[prop(optional)] delay_ms: u64,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let spec = SkeletonSpec {
        variant,
        size,
        width,
        height,
        border_radius,
    };
    let style = spec.style();
    let visible = create_rw_signal(delay_ms == 0);

    if delay_ms > 0 {
        match set_timeout_with_handle(
            move || visible.set(true),
            std::time::Duration::from_millis(delay_ms),
        ) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => {
                logging::warn!("skeleton delay timer failed: {err:?}");
                visible.set(true);
            }
        }
    }

    let item = move || {
        view! {
            <div
                class=merge_layout_class("ui-skeleton", layout_class)
                style=style.clone()
                aria-hidden="true"
                data-ui-primitive="true"
                data-ui-kind="skeleton"
                data-ui-variant=variant.token()
                data-ui-animation=animation.token()
                data-ui-intensity=intensity.token()
                data-ui-shimmer=bool_token(shimmer)
            ></div>
        }
    };

    move || {
        if !visible.get() {
            return ().into_view();
        }
        if count > 1 {
            view! { <div data-ui-slot="skeleton-stack">{(0..count).map(|_| item()).collect_view()}</div> }
                .into_view()
        } else {
            item().into_view()
        }
    }
}

#[component]
/// Text-line placeholder preset.
pub fn SkeletonText(
    #[prop(optional, into)] width: Option<Dimension>,
    #[prop(optional, into)] height: Option<Dimension>,
    #[prop(default = SkeletonIntensity::Medium)] intensity: SkeletonIntensity,
) -> impl IntoView {
    match (width, height) {
        (Some(width), Some(height)) => {
            view! { <Skeleton variant=SkeletonVariant::Text width height intensity /> }
        }
        (Some(width), None) => view! { <Skeleton variant=SkeletonVariant::Text width intensity /> },
        (None, Some(height)) => view! { <Skeleton variant=SkeletonVariant::Text height intensity /> },
        (None, None) => view! { <Skeleton variant=SkeletonVariant::Text intensity /> },
    }
}

#[component]
/// Table-body placeholder rows: `rows` rows of `columns` text cells.
pub fn SkeletonRows(rows: usize, columns: usize) -> impl IntoView {
    (0..rows)
        .map(|_| {
            view! {
                <tr data-ui-slot="skeleton-row" aria-hidden="true">
                    {(0..columns.max(1))
                        .map(|_| view! { <td><Skeleton variant=SkeletonVariant::Text /></td> })
                        .collect_view()}
                </tr>
            }
        })
        .collect_view()
}
