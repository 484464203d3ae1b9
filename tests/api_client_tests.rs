mod common;
use common::{CLASSES_JSON, STUDENTS_JSON, d};

use mockito::Matcher;
use rattendance::api::ApiClient;
use rattendance::api::wire::decode_records;
use rattendance::errors::AppError;
use rattendance::models::{AttendanceStatus, AttendanceSubmission, DateRange, Session};
use serde_json::json;

fn client(server: &mockito::Server) -> ApiClient {
    ApiClient::new(&server.url(), 5).expect("client")
}

#[test]
fn test_list_classes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/classes")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(CLASSES_JSON)
        .create();

    let classes = client(&server).list_classes().unwrap();

    mock.assert();
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].name, "CS-A");
    assert_eq!(classes[1].id, 2);
}

#[test]
fn test_list_students_of_class() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/classes/7/students")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(STUDENTS_JSON)
        .create();

    let students = client(&server).list_students(7).unwrap();

    mock.assert();
    assert_eq!(students.len(), 3);
    assert_eq!(students[2].roll_number, 3);
    assert_eq!(students[2].name, "Chen");
}

#[test]
fn test_submit_attendance_posts_expected_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/attendance")
        .match_body(Matcher::Json(json!({
            "class_id": 1,
            "date": "2024-06-04",
            "session": "afternoon",
            "absentees": [2, 3],
            "marked_by": 5
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"Attendance inserted successfully"}"#)
        .create();

    let sub = AttendanceSubmission {
        class_id: 1,
        date: d("2024-06-04"),
        session: Session::Afternoon,
        absentees: vec![2, 3],
        marked_by: 5,
    };

    let ack = client(&server).submit_attendance(&sub).unwrap();

    mock.assert();
    assert_eq!(
        ack.message.as_deref(),
        Some("Attendance inserted successfully")
    );
}

#[test]
fn test_submit_attendance_accepts_empty_body() {
    let mut server = mockito::Server::new();
    server.mock("POST", "/attendance").with_status(201).create();

    let sub = AttendanceSubmission {
        class_id: 1,
        date: d("2024-06-04"),
        session: Session::Fullday,
        absentees: vec![1],
        marked_by: 1,
    };

    let ack = client(&server).submit_attendance(&sub).unwrap();
    assert!(ack.message.is_none());
}

#[test]
fn test_fetch_attendance_sends_range_and_decodes() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/attendance/42")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "2024-06-03".into()),
            Matcher::UrlEncoded("end".into(), "2024-06-07".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"date":"2024-06-04","status":"absent","extra":true},
                {"date":"2024-06-06","status":"present"}
            ]"#,
        )
        .create();

    let range = DateRange::parse("2024-06-03", "2024-06-07").unwrap();
    let records = client(&server).fetch_attendance("42", &range).unwrap();

    mock.assert();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, d("2024-06-04"));
    assert_eq!(records[0].status, AttendanceStatus::Absent);
    assert_eq!(records[1].status, AttendanceStatus::Present);
}

#[test]
fn test_backend_error_status_is_reported() {
    let mut server = mockito::Server::new();
    server.mock("GET", "/classes").with_status(500).create();

    let err = client(&server).list_classes().unwrap_err();
    match err {
        AppError::Backend { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/classes"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_base_url_with_path_prefix() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/classes")
        .with_status(200)
        .with_body("[]")
        .create();

    let api = ApiClient::new(&format!("{}/api/", server.url()), 5).unwrap();
    assert!(api.list_classes().unwrap().is_empty());
    mock.assert();
}

#[test]
fn test_invalid_base_url() {
    assert!(matches!(
        ApiClient::new("not a url", 5),
        Err(AppError::InvalidUrl(_))
    ));
}

#[test]
fn test_decode_records_tolerates_schema_drift() {
    let rows = vec![
        json!({"date": "2024-06-03", "status": "Present"}),
        json!({"date": "2024-06-04", "status": "late"}),           // unknown status
        json!({"date": "2024-06-05"}),                              // no status
        json!({"status": "absent"}),                                // no date
        json!({"date": "06/06/2024", "status": "absent"}),          // bad date
        json!({"date": "2024-06-07T00:00:00", "is_present": "absent"}),
        json!({"date": "2024-06-10", "is_present": true, "student_id": 4}),
        json!({"date": "2024-06-11", "status": false}),
        json!("garbage"),
    ];

    let records = decode_records(rows);

    let got: Vec<_> = records.iter().map(|r| (r.date, r.status)).collect();
    assert_eq!(
        got,
        vec![
            (d("2024-06-03"), AttendanceStatus::Present),
            (d("2024-06-07"), AttendanceStatus::Absent),
            (d("2024-06-10"), AttendanceStatus::Present),
            (d("2024-06-11"), AttendanceStatus::Absent),
        ]
    );
}
