pub mod log;
pub mod mark;
pub mod matrix;
pub mod share;
pub mod summary;
pub mod view;

pub use matrix::{AttendanceMatrix, DayCell, WeekColumn, build_matrix};
pub use summary::AttendanceSummary;
