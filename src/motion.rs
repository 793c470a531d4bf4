//! Timing of the mount-time entrance animation.
//!
//! Blocks fade in from `ENTRANCE_OFFSET_PX` below their resting position.
//! The keyframes live in `input.css` (`.reveal`); this module only decides
//! when each block starts.

use std::time::Duration;

pub const INITIAL_DELAY: Duration = Duration::from_millis(200);
pub const STAGGER: Duration = Duration::from_millis(100);
pub const ENTRANCE_OFFSET_PX: u32 = 20;
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(500);

/// Footer starts once the page blocks are under way.
pub const FOOTER_DELAY: Duration = Duration::from_millis(500);

pub fn entrance_delay(index: usize) -> Duration {
    INITIAL_DELAY + STAGGER * index as u32
}

pub fn entrance_style(index: usize) -> String {
    delay_style(entrance_delay(index))
}

pub fn delay_style(delay: Duration) -> String {
    format!(
        "animation-delay: {}ms; animation-duration: {}ms; --reveal-offset: {}px;",
        delay.as_millis(),
        ENTRANCE_DURATION.as_millis(),
        ENTRANCE_OFFSET_PX
    )
}
