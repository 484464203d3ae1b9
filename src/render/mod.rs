pub mod calendar;

pub use calendar::{render_calendar, render_legend};
