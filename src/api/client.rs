//! Blocking HTTP client for the attendance backend.

use super::wire::decode_records;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Acknowledgement, AttendanceRecord, AttendanceSubmission, ClassInfo, DateRange, Student,
};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        // validate once, fail before the first request
        Url::parse(base_url).map_err(|_| AppError::InvalidUrl(base_url.to_string()))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|_| AppError::InvalidUrl(self.base_url.clone()))?;
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn check(resp: Response) -> AppResult<Response> {
        let status = resp.status();
        if !status.is_success() {
            return Err(AppError::Backend {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let resp = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()?;
        let resp = Self::check(resp)?;
        Ok(resp.json::<T>()?)
    }

    /// `GET /classes`
    pub fn list_classes(&self) -> AppResult<Vec<ClassInfo>> {
        self.get_json(self.url(&["classes"])?)
    }

    /// `GET /classes/{id}/students`
    pub fn list_students(&self, class_id: i64) -> AppResult<Vec<Student>> {
        let id = class_id.to_string();
        self.get_json(self.url(&["classes", &id, "students"])?)
    }

    /// `POST /attendance`
    pub fn submit_attendance(&self, sub: &AttendanceSubmission) -> AppResult<Acknowledgement> {
        let resp = self.http.post(self.url(&["attendance"])?).json(sub).send()?;
        let resp = Self::check(resp)?;

        // the acknowledgement shape is loose; an empty or foreign body is still a success
        let body = resp.text()?;
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    /// `GET /attendance/{student_id}?start=&end=`
    pub fn fetch_attendance(
        &self,
        student_id: &str,
        range: &DateRange,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let mut url = self.url(&["attendance", student_id])?;
        url.query_pairs_mut()
            .append_pair("start", &range.start().format("%Y-%m-%d").to_string())
            .append_pair("end", &range.end().format("%Y-%m-%d").to_string());

        let rows: Vec<serde_json::Value> = self.get_json(url)?;
        Ok(decode_records(rows))
    }
}
