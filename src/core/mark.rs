use crate::api::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{Acknowledgement, AttendanceSubmission, ClassInfo, Session, Student};
use crate::ui::messages::warning;
use chrono::NaiveDate;

pub struct MarkRequest {
    pub class_id: i64,
    pub date: NaiveDate,
    pub session: Session,
    pub absentees: Vec<u32>,
    pub marked_by: i64,
}

pub struct MarkOutcome {
    pub submission: AttendanceSubmission,
    pub ack: Acknowledgement,
    pub classes: Vec<ClassInfo>,
    pub students: Vec<Student>,
}

pub struct MarkLogic;

impl MarkLogic {
    /// Check absentees against the class roster.
    ///
    /// Duplicates collapse to their first occurrence; an empty list and
    /// a roll outside the roster are both rejected.
    pub fn validate_absentees(
        class_id: i64,
        absentees: &[u32],
        students: &[Student],
    ) -> AppResult<Vec<u32>> {
        let mut out: Vec<u32> = Vec::with_capacity(absentees.len());

        for &roll in absentees {
            if !students.iter().any(|s| s.roll_number == roll) {
                return Err(AppError::UnknownRollNumber { roll, class_id });
            }
            if out.contains(&roll) {
                warning(format!("Roll number {roll} given more than once, keeping one."));
                continue;
            }
            out.push(roll);
        }

        if out.is_empty() {
            return Err(AppError::NoAbsentees);
        }

        Ok(out)
    }

    /// Fetch the class and roster, validate, then submit.
    pub fn apply(api: &ApiClient, req: MarkRequest) -> AppResult<MarkOutcome> {
        if req.absentees.is_empty() {
            return Err(AppError::NoAbsentees);
        }

        let classes = api.list_classes()?;
        if !classes.iter().any(|c| c.id == req.class_id) {
            return Err(AppError::UnknownClass(req.class_id));
        }

        let students = api.list_students(req.class_id)?;
        let absentees = Self::validate_absentees(req.class_id, &req.absentees, &students)?;

        let submission = AttendanceSubmission {
            class_id: req.class_id,
            date: req.date,
            session: req.session,
            absentees,
            marked_by: req.marked_by,
        };

        let ack = api.submit_attendance(&submission)?;

        Ok(MarkOutcome {
            submission,
            ack,
            classes,
            students,
        })
    }
}
