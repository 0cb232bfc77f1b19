//! Viewport-aware placement for tooltips and the row action menu.

/// Gap kept between a floating element and the viewport edge.
pub const VIEWPORT_MARGIN: f64 = 10.0;
/// Height the row action menu is assumed to need.
pub const MENU_HEIGHT: f64 = 300.0;
/// Fixed width of the row action menu.
pub const MENU_WIDTH: f64 = 192.0;

/// Axis-aligned rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Rect {
    /// Right edge.
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Side of the trigger a tooltip appears on.
pub enum TooltipPlacement {
    /// Above.
    #[default]
    Top,
    /// Below.
    Bottom,
    /// To the left.
    Left,
    /// To the right.
    Right,
}

impl TooltipPlacement {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Flips to the opposite side when the preferred side would leave the viewport.
    pub fn resolve(self, trigger: Rect, tooltip: Rect, viewport_width: f64, viewport_height: f64) -> Self {
        match self {
            Self::Top if trigger.top - tooltip.height < VIEWPORT_MARGIN => Self::Bottom,
            Self::Bottom if trigger.bottom() + tooltip.height > viewport_height - VIEWPORT_MARGIN => {
                Self::Top
            }
            Self::Left if trigger.left - tooltip.width < VIEWPORT_MARGIN => Self::Right,
            Self::Right if trigger.right() + tooltip.width > viewport_width - VIEWPORT_MARGIN => {
                Self::Left
            }
            other => other,
        }
    }
}

/// Document-space position of the row action menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuPosition {
    /// Top offset in pixels.
    pub top: f64,
    /// Left offset in pixels.
    pub left: f64,
    /// Whether the menu opens above its trigger.
    pub above: bool,
}

impl MenuPosition {
    /// Opens below the trigger unless there is less than [`MENU_HEIGHT`] below and more room
    /// above; always right-aligned with the trigger.
    pub fn for_trigger(trigger: Rect, viewport_height: f64, scroll_x: f64, scroll_y: f64) -> Self {
        let space_below = viewport_height - trigger.bottom();
        let space_above = trigger.top;
        let above = space_below < MENU_HEIGHT && space_above > space_below;
        let top = if above {
            trigger.top - MENU_HEIGHT + scroll_y
        } else {
            trigger.bottom() + scroll_y
        };
        Self {
            top,
            left: trigger.right() - MENU_WIDTH + scroll_x,
            above,
        }
    }

    /// Inline style string for the absolutely positioned menu.
    pub fn style(&self) -> String {
        format!("top: {:.0}px; left: {:.0}px;", self.top, self.left)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rect(left: f64, top: f64, width: f64, height: f64) -> Rect {
        Rect {
            left,
            top,
            width,
            height,
        }
    }

    #[test]
    fn tooltip_flips_when_preferred_side_overflows() {
        let tip = rect(0.0, 0.0, 120.0, 30.0);
        let near_top = rect(200.0, 20.0, 40.0, 20.0);
        assert_eq!(
            TooltipPlacement::Top.resolve(near_top, tip, 1024.0, 768.0),
            TooltipPlacement::Bottom
        );

        let near_bottom = rect(200.0, 740.0, 40.0, 20.0);
        assert_eq!(
            TooltipPlacement::Bottom.resolve(near_bottom, tip, 1024.0, 768.0),
            TooltipPlacement::Top
        );

        let near_left = rect(40.0, 300.0, 40.0, 20.0);
        assert_eq!(
            TooltipPlacement::Left.resolve(near_left, tip, 1024.0, 768.0),
            TooltipPlacement::Right
        );

        let near_right = rect(950.0, 300.0, 40.0, 20.0);
        assert_eq!(
            TooltipPlacement::Right.resolve(near_right, tip, 1024.0, 768.0),
            TooltipPlacement::Left
        );
    }

    #[test]
    fn tooltip_keeps_preferred_side_when_it_fits() {
        let tip = rect(0.0, 0.0, 120.0, 30.0);
        let centered = rect(400.0, 300.0, 40.0, 20.0);
        for placement in [
            TooltipPlacement::Top,
            TooltipPlacement::Bottom,
            TooltipPlacement::Left,
            TooltipPlacement::Right,
        ] {
            assert_eq!(placement.resolve(centered, tip, 1024.0, 768.0), placement);
        }
    }

    #[test]
    fn menu_opens_below_with_room_and_above_near_the_bottom() {
        let trigger = rect(500.0, 100.0, 32.0, 32.0);
        let below = MenuPosition::for_trigger(trigger, 800.0, 0.0, 50.0);
        assert!(!below.above);
        assert_eq!(below.top, 182.0);
        assert_eq!(below.left, 340.0);

        let low_trigger = rect(500.0, 700.0, 32.0, 32.0);
        let above = MenuPosition::for_trigger(low_trigger, 800.0, 0.0, 0.0);
        assert!(above.above);
        assert_eq!(above.top, 400.0);
        assert_eq!(above.style(), "top: 400px; left: 340px;");
    }
}
