//! datecore — calendar engine and date picker for slow computer applications
//!
//! The date math and selection state live in [`grid`], [`locale`] and
//! [`state`] and know nothing about rendering. [`picker`] wraps them in an
//! egui widget drawn in the slow computer style ([`theme`], [`paint`]), and
//! [`entry`] validates date text typed by a hosting shell.

pub mod entry;
pub mod grid;
pub mod locale;
pub mod paint;
pub mod picker;
pub mod state;
pub mod theme;

pub use picker::DatePicker;
pub use state::{CalendarEvent, CalendarState};
pub use theme::SlowTheme;

/// Window position offset for staggering multiple instances.
/// The slowOS launcher exports SLOWOS_CASCADE with the launch ordinal.
pub fn cascade_position() -> Option<egui::Pos2> {
    std::env::var("SLOWOS_CASCADE").ok()
        .and_then(|s| s.parse::<u32>().ok())
        .map(|n| {
            let offset = (n as f32) * 30.0;
            egui::Pos2::new(100.0 + offset, 100.0 + offset)
        })
}
