pub mod range;
pub mod record;
pub mod roster;
pub mod session;
pub mod status;
pub mod submission;

pub use range::DateRange;
pub use record::AttendanceRecord;
pub use roster::{ClassInfo, Student};
pub use session::Session;
pub use status::{AttendanceStatus, DayStatus};
pub use submission::{Acknowledgement, AttendanceSubmission};
