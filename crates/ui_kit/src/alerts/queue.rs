//! Headless alert bookkeeping: the visible stack and per-alert countdown progress.

use crate::IconName;

/// Interval between countdown ticks.
pub const TICK_MS: u64 = 100;
/// Duration of the exit transition before an alert is removed.
pub const EXIT_TRANSITION_MS: u64 = 300;
/// Vertical offset between stacked alerts.
pub const STACK_OFFSET_PX: usize = 10;
/// z-index of the newest-first top of the stack.
pub const STACK_BASE_Z_INDEX: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Alert severity.
pub enum AlertKind {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Neutral notice.
    #[default]
    Info,
    /// Needs attention.
    Warning,
}

impl AlertKind {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
        }
    }

    pub(crate) fn icon(self) -> IconName {
        match self {
            Self::Success => IconName::CheckCircle,
            Self::Error => IconName::AlertCircle,
            Self::Info => IconName::Info,
            Self::Warning => IconName::AlertTriangle,
        }
    }
}

/// What to show. The queue assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertSpec {
    /// Headline.
    pub message: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Severity.
    pub kind: AlertKind,
    /// Lifetime override; the provider default applies when `None`.
    pub duration_ms: Option<u64>,
}

impl AlertSpec {
    /// Alert of `kind` with `message`.
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
            ..Self::default()
        }
    }

    /// Adds secondary text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the lifetime.
    pub fn duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// An alert currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertItem {
    /// Queue-assigned id, unique for the queue's lifetime.
    pub id: u64,
    /// Headline.
    pub message: String,
    /// Optional secondary text.
    pub description: Option<String>,
    /// Severity.
    pub kind: AlertKind,
    /// Resolved lifetime.
    pub duration_ms: u64,
}

/// Ordered stack of visible alerts, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertQueue {
    next_id: u64,
    items: Vec<AlertItem>,
}

impl AlertQueue {
    /// Empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an alert and returns its id.
    pub fn push(&mut self, spec: AlertSpec, default_duration_ms: u64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(AlertItem {
            id,
            message: spec.message,
            description: spec.description,
            kind: spec.kind,
            duration_ms: spec.duration_ms.unwrap_or(default_duration_ms),
        });
        id
    }

    /// Removes the alert with `id`. Returns whether it was present.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Alerts in display order.
    pub fn items(&self) -> &[AlertItem] {
        &self.items
    }

    /// Stack position of `id`.
    pub fn index_of(&self, id: u64) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Number of visible alerts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Inline style placing the alert at stack position `index`.
pub fn stack_style(index: usize) -> String {
    let offset = index * STACK_OFFSET_PX;
    let z_index = STACK_BASE_Z_INDEX - i64::try_from(index).unwrap_or(i64::MAX);
    format!("transform: translateY({offset}px); z-index: {z_index};")
}

/// Remaining-lifetime progress bar, advanced in [`TICK_MS`] steps from 100% to 0%.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertCountdown {
    duration_ms: u64,
    elapsed_ms: u64,
}

impl AlertCountdown {
    /// Countdown for an alert living `duration_ms`.
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            elapsed_ms: 0,
        }
    }

    /// Advances one tick.
    pub fn tick(&mut self) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(TICK_MS).min(self.duration_ms);
    }

    /// Remaining share of the lifetime, from 100.0 down to 0.0.
    pub fn progress_percent(&self) -> f64 {
        if self.duration_ms == 0 {
            return 0.0;
        }
        let remaining = self.duration_ms - self.elapsed_ms;
        remaining as f64 * 100.0 / self.duration_ms as f64
    }

    /// Whether the bar is empty.
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut queue = AlertQueue::new();
        let first = queue.push(AlertSpec::new(AlertKind::Success, "Saved"), 5000);
        let second = queue.push(
            AlertSpec::new(AlertKind::Error, "Failed")
                .description("Try again")
                .duration_ms(800),
            5000,
        );
        assert!(queue.remove(first));
        assert!(!queue.remove(first));
        let third = queue.push(AlertSpec::new(AlertKind::Info, "Heads up"), 5000);

        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.items()[0].duration_ms, 800);
        assert_eq!(queue.items()[0].description.as_deref(), Some("Try again"));
        assert_eq!(queue.items()[1].duration_ms, 5000);
        assert_eq!(queue.index_of(third), Some(1));
    }

    #[test]
    fn stacking_offsets_and_layers() {
        assert_eq!(stack_style(0), "transform: translateY(0px); z-index: 50;");
        assert_eq!(stack_style(3), "transform: translateY(30px); z-index: 47;");
    }

    #[test]
    fn countdown_runs_from_full_to_empty_in_ticks() {
        let mut countdown = AlertCountdown::new(500);
        assert_eq!(countdown.progress_percent(), 100.0);
        countdown.tick();
        assert_eq!(countdown.progress_percent(), 80.0);
        for _ in 0..10 {
            countdown.tick();
        }
        assert_eq!(countdown.progress_percent(), 0.0);
        assert!(countdown.is_finished());
    }

    #[test]
    fn zero_duration_countdown_is_already_finished() {
        let countdown = AlertCountdown::new(0);
        assert!(countdown.is_finished());
        assert_eq!(countdown.progress_percent(), 0.0);
    }
}
