//! Host-loop binding: pointer events in, panel state out.
//!
//! Routes pointer moves through the page's hit grid, turns hover
//! transitions into controller show/hide calls, and advances the
//! timers. This is the piece a rendering client embeds.

use std::time::Instant;

use kurbo::Point;

use crate::config::TipConfig;
use crate::page::{Page, RegionId};
use crate::tooltip::{TooltipController, Visibility};
use crate::viewport::Viewport;

pub struct ViewerSession {
    controller: TooltipController,
    page: Page,
    hovered: Option<RegionId>,
}

impl ViewerSession {
    pub fn new(config: TipConfig, page: Page, viewport: Viewport) -> Self {
        let mut controller = TooltipController::new();
        controller.init(config);
        controller.set_viewport(viewport);
        Self {
            controller,
            page,
            hovered: None,
        }
    }

    /// Handle a pointer move at `pos` (document coordinates).
    ///
    /// Leave fires before enter when the move crosses a region boundary,
    /// matching the event order the hover sources deliver. Moves within
    /// one region only track.
    pub fn pointer_moved(&mut self, pos: Point, now: Instant) {
        let new_hovered = self.page.region_at(pos);
        if new_hovered == self.hovered {
            self.controller.track(pos);
            return;
        }

        let old_hovered = self.hovered;
        self.hovered = new_hovered;
        if let Some(old_id) = old_hovered {
            tracing::debug!("Leave region {:?}", old_id);
            self.controller.hide();
        }
        if let Some(new_id) = new_hovered
            && let Some(region) = self.page.region(new_id)
        {
            tracing::debug!("Enter region {:?}", new_id);
            if region.rich {
                self.controller.show_markup(&region.content, pos, now);
            } else {
                self.controller.show(&region.content, pos, now);
            }
        }
        self.controller.track(pos);
    }

    /// Pointer left the window: drop hover state and hide.
    pub fn pointer_left(&mut self) {
        if self.hovered.take().is_some() {
            self.controller.hide();
        }
    }

    /// Fire due timers. Returns the number fired.
    pub fn advance(&mut self, now: Instant) -> usize {
        self.controller.tick(now)
    }

    /// Nearest pending deadline, for hosts that sleep between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.controller.set_viewport(viewport);
    }

    pub fn hovered(&self) -> Option<RegionId> {
        self.hovered
    }

    pub fn controller(&self) -> &TooltipController {
        &self.controller
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// One-line panel summary for logs and snapshots.
    pub fn describe(&self) -> String {
        let phase = self.controller.phase();
        match (phase, self.controller.panel()) {
            (Visibility::Hidden, _) | (_, None) => phase.as_str().to_string(),
            (_, Some(panel)) => format!(
                "{} at ({:.0},{:.0}) {:.0}x{:.0} {:?}",
                phase.as_str(),
                panel.x,
                panel.y,
                panel.width,
                panel.height,
                panel.content
            ),
        }
    }
}
