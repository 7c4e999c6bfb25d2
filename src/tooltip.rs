//! Tooltip visibility and placement.
//!
//! One controller instance owns the panel, the pointer bookkeeping and
//! the reveal/auto-hide timer pair. Hosts feed it hover and pointer
//! events and tick it with the current instant.

use std::time::{Duration, Instant};

use kurbo::Point;

use crate::config::TipConfig;
use crate::panel::Panel;
use crate::timer::{TimerKind, TimerQueue};
use crate::viewport::Viewport;

/// Delay between `show` and the panel turning visible in follow-mouse
/// mode. Long enough that grazing a region never pops the panel.
pub const REVEAL_DELAY: Duration = Duration::from_millis(800);

/// Fixed extra second on top of the configured hide-after, so a zero
/// config still shows the panel briefly.
const HIDE_GRACE: Duration = Duration::from_secs(1);

/// Content shorter than this fraction of the configured width gets a
/// tight panel for that show.
const SHRINK_FACTOR: f64 = 0.8;

/// Panel visibility phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    /// Shown but waiting out the reveal delay.
    PendingVisible,
    Visible,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hidden => "hidden",
            Self::PendingVisible => "pending-visible",
            Self::Visible => "visible",
        }
    }
}

/// Hover tooltip controller.
///
/// Does nothing until [`init`]: every operation on an uninitialized
/// controller is a silent no-op, mirroring a page whose tooltip element
/// was never created.
///
/// [`init`]: TooltipController::init
#[derive(Debug, Default)]
pub struct TooltipController {
    inner: Option<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: TipConfig,
    panel: Panel,
    phase: Visibility,
    last_pointer: Option<Point>,
    timers: TimerQueue,
    viewport: Viewport,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the panel and apply the static style once. The viewport
    /// starts at its default; hosts update it via [`set_viewport`].
    /// A hide-after that cannot become a duration falls back to the
    /// default with a warning.
    ///
    /// [`set_viewport`]: TooltipController::set_viewport
    pub fn init(&mut self, mut config: TipConfig) {
        if Duration::try_from_secs_f64(config.hide_after_secs.max(0.0)).is_err() {
            let fallback = TipConfig::default().hide_after_secs;
            tracing::warn!(
                "Unusable hide-after {}, using {} s",
                config.hide_after_secs,
                fallback
            );
            config.hide_after_secs = fallback;
        }
        let panel = Panel::new(config.panel_style(), config.width);
        self.inner = Some(Inner {
            panel,
            phase: Visibility::Hidden,
            last_pointer: None,
            timers: TimerQueue::new(),
            viewport: Viewport::default(),
            config,
        });
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.is_some()
    }

    /// Current phase. `Hidden` when uninitialized.
    pub fn phase(&self) -> Visibility {
        self.inner.as_ref().map(|i| i.phase).unwrap_or_default()
    }

    /// The panel, for rendering hosts and assertions. `None` before init.
    pub fn panel(&self) -> Option<&Panel> {
        self.inner.as_ref().map(|i| &i.panel)
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.inner.as_ref().and_then(|i| i.last_pointer)
    }

    /// Update the visible window. Takes effect on the next placement.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if let Some(inner) = &mut self.inner {
            inner.viewport = viewport;
        }
    }

    /// Fill the panel with `text`, place it at `anchor` and start the
    /// reveal/auto-hide cycle. Any earlier pending timers are replaced.
    /// A show over an already-visible panel swaps the content in place
    /// instead of re-running the reveal delay.
    ///
    /// `text` is literal: markup goes through [`show_markup`] instead.
    ///
    /// [`show_markup`]: TooltipController::show_markup
    pub fn show(&mut self, text: &str, anchor: Point, now: Instant) {
        let Some(inner) = &mut self.inner else { return };
        inner.timers.cancel_all();

        // Short content gets a tight panel for this show only; the
        // configured width is untouched and the next show starts over.
        let chars = text.chars().count() as f64;
        let tight = chars * inner.panel.style.font.avg_char_width();
        inner.panel.width = if tight < SHRINK_FACTOR * inner.config.width {
            tight
        } else {
            inner.config.width
        };
        inner.panel.content = text.to_string();
        inner.panel.measure();
        inner.position(anchor);

        // An already-visible panel keeps showing through a re-show; only
        // a hidden one waits out the reveal delay.
        if inner.config.follow_mouse && inner.phase != Visibility::Visible {
            inner.phase = Visibility::PendingVisible;
            inner.panel.visible = false;
            inner.timers.schedule(TimerKind::Reveal, now + REVEAL_DELAY);
        } else {
            inner.phase = Visibility::Visible;
            inner.panel.visible = true;
        }
        let linger = Duration::from_secs_f64(inner.config.hide_after_secs.max(0.0));
        inner.timers.schedule(TimerKind::AutoHide, now + linger + HIDE_GRACE);

        tracing::debug!(
            "Show {} chars at ({:.0},{:.0}), {}",
            chars as usize,
            inner.panel.x,
            inner.panel.y,
            inner.phase.as_str()
        );
    }

    /// [`show`](TooltipController::show) for markup content: tags are
    /// stripped and basic entities decoded before the text reaches the
    /// panel.
    pub fn show_markup(&mut self, markup: &str, anchor: Point, now: Instant) {
        let text = crate::markup::sanitize(markup);
        self.show(&text, anchor, now);
    }

    /// Follow the pointer while hovering. Replaces the panel position
    /// only; timers and visibility stay as they are, so rapid moves
    /// cannot flicker the panel. No-op unless follow-mouse is on.
    pub fn track(&mut self, pointer: Point) {
        let Some(inner) = &mut self.inner else { return };
        if !inner.config.follow_mouse {
            return;
        }
        inner.position(pointer);
    }

    /// Place the panel next to `pointer`, flipping to the far side of
    /// an axis when the near side would cross the visible edge.
    pub fn position(&mut self, pointer: Point) {
        let Some(inner) = &mut self.inner else { return };
        inner.position(pointer);
    }

    /// Hide immediately and drop any pending timers. Idempotent, and
    /// safe on a controller that never showed anything.
    pub fn hide(&mut self) {
        let Some(inner) = &mut self.inner else { return };
        inner.timers.cancel_all();
        if inner.phase != Visibility::Hidden {
            tracing::debug!("Hide");
        }
        inner.phase = Visibility::Hidden;
        inner.panel.visible = false;
    }

    /// Fire due timers. Returns the number fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(inner) = &mut self.inner else { return 0 };
        let fired = inner.timers.process(now);
        let count = fired.len();
        for kind in fired {
            tracing::debug!("Timer fired: {}", kind.as_str());
            match kind {
                TimerKind::Reveal => {
                    if inner.phase == Visibility::PendingVisible {
                        inner.phase = Visibility::Visible;
                        inner.panel.visible = true;
                    }
                }
                TimerKind::AutoHide => {
                    inner.phase = Visibility::Hidden;
                    inner.panel.visible = false;
                }
            }
        }
        count
    }

    /// Nearest pending deadline, for hosts that sleep between ticks.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.as_ref().and_then(|i| i.timers.next_deadline())
    }

    /// Number of live timers.
    pub fn pending_timers(&self) -> usize {
        self.inner.as_ref().map(|i| i.timers.pending()).unwrap_or(0)
    }

    /// Whether a live timer of `kind` exists.
    pub fn timer_scheduled(&self, kind: TimerKind) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|i| i.timers.is_scheduled(kind))
    }

    /// Deadline of the live timer of `kind`, if any.
    pub fn timer_deadline(&self, kind: TimerKind) -> Option<Instant> {
        self.inner.as_ref().and_then(|i| i.timers.deadline(kind))
    }
}

impl Inner {
    fn position(&mut self, pointer: Point) {
        self.last_pointer = Some(pointer);
        let panel = &mut self.panel;

        if pointer.x + self.config.offset_x + panel.width > self.viewport.visible_right() {
            panel.x = pointer.x - panel.width - self.config.offset_x;
        } else {
            panel.x = pointer.x + self.config.offset_x;
        }
        if pointer.y + self.config.offset_y + panel.height > self.viewport.visible_bottom() {
            panel.y = pointer.y - panel.height - self.config.offset_y;
        } else {
            panel.y = pointer.y + self.config.offset_y;
        }
    }
}
