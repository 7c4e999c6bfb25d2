//! Shared test helpers.

use std::time::Duration;

use tooltip_sim::config::TipConfig;
use tooltip_sim::tooltip::TooltipController;
use tooltip_sim::viewport::Viewport;

/// One line at the default width: 25 chars x 8 px = 200, over the
/// 192 px shrink threshold.
#[allow(dead_code)]
pub const ONE_LINER: &str = "World Health Organization";

/// Defaults with a short auto-hide so test instants stay readable.
#[allow(dead_code)]
pub fn quick_config() -> TipConfig {
    TipConfig {
        hide_after_secs: 5.0,
        ..TipConfig::default()
    }
}

/// Initialized controller on a 1024x768 viewport.
#[allow(dead_code)]
pub fn controller(config: TipConfig) -> TooltipController {
    let mut ctrl = TooltipController::new();
    ctrl.init(config);
    ctrl.set_viewport(Viewport::new(1024.0, 768.0));
    ctrl
}

#[allow(dead_code)]
pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
