use rattendance::core::mark::MarkLogic;
use rattendance::errors::AppError;
use rattendance::models::Student;

fn roster() -> Vec<Student> {
    ["Asha", "Bilal", "Chen"]
        .iter()
        .enumerate()
        .map(|(i, name)| Student {
            roll_number: i as u32 + 1,
            name: name.to_string(),
        })
        .collect()
}

#[test]
fn test_repeated_rolls_keep_first_occurrence() {
    let out = MarkLogic::validate_absentees(1, &[3, 1, 3, 2, 1], &roster()).unwrap();
    assert_eq!(out, vec![3, 1, 2]);
}

#[test]
fn test_entry_order_is_preserved() {
    let out = MarkLogic::validate_absentees(1, &[2, 1], &roster()).unwrap();
    assert_eq!(out, vec![2, 1]);
}

#[test]
fn test_unknown_roll_is_rejected() {
    let err = MarkLogic::validate_absentees(4, &[1, 9], &roster()).unwrap_err();
    assert!(matches!(
        err,
        AppError::UnknownRollNumber {
            roll: 9,
            class_id: 4
        }
    ));
}

#[test]
fn test_empty_absentees_are_rejected() {
    assert!(matches!(
        MarkLogic::validate_absentees(1, &[], &roster()),
        Err(AppError::NoAbsentees)
    ));
}
