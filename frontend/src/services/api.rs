use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared::{
    Classroom, LoginRequest, LoginResponse, NewClassroomAllocation, NewStudent,
    NewSubjectAllocation, NewTeacher, Student, StudentReportDetail, Subject, Teacher,
    TeacherAndSubject, TeacherClassroomAllocation, TeacherSubjectAllocation,
};

/// User-facing error categories for backend calls.
///
/// Every failed request collapses into one of four messages:
/// the server's own validation message (or "Bad request") for a 400,
/// "Not found" for a 404, "Internal server error" for a 500, and
/// "An error occurred" for anything else including network failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    ServerError,
    #[error("An error occurred")]
    Other,
}

/// Shape of the backend's 400 body when it carries a validation message.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a failed response's status and body to an [`ApiError`].
fn map_failure(status: u16, body: &str) -> ApiError {
    match status {
        400 => {
            let message = serde_json::from_str::<ErrorBody>(body)
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Bad request".to_string());
            ApiError::BadRequest(message)
        }
        404 => ApiError::NotFound,
        500 => ApiError::ServerError,
        _ => ApiError::Other,
    }
}

/// API client for communicating with the school management backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "https://localhost:44358".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    async fn check(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(map_failure(status, &body))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = Request::get(&format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|_| ApiError::Other)?;
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(|_| ApiError::Other)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = Request::post(&format!("{}{}", self.base_url, path))
            .json(body)
            .map_err(|_| ApiError::Other)?
            .send()
            .await
            .map_err(|_| ApiError::Other)?;
        let response = Self::check(response).await?;
        response.json::<T>().await.map_err(|_| ApiError::Other)
    }

    /// POST where the response body is irrelevant to the caller.
    async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::post(&format!("{}{}", self.base_url, path))
            .json(body)
            .map_err(|_| ApiError::Other)?
            .send()
            .await
            .map_err(|_| ApiError::Other)?;
        Self::check(response).await.map(|_| ())
    }

    async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = Request::put(&format!("{}{}", self.base_url, path))
            .json(body)
            .map_err(|_| ApiError::Other)?
            .send()
            .await
            .map_err(|_| ApiError::Other)?;
        Self::check(response).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = Request::delete(&format!("{}{}", self.base_url, path))
            .send()
            .await
            .map_err(|_| ApiError::Other)?;
        Self::check(response).await.map(|_| ())
    }

    // --- auth ---

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json("/api/auth/login", request).await
    }

    // --- students ---

    pub async fn list_students(&self) -> Result<Vec<Student>, ApiError> {
        self.get_json("/api/student").await
    }

    pub async fn create_student(&self, student: &NewStudent) -> Result<(), ApiError> {
        // Create goes to /api/Student while list reads /api/student; the
        // backend routes are case-insensitive but the original paths are kept.
        self.post_unit("/api/Student", student).await
    }

    pub async fn update_student(&self, student: &Student) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/Student/{}", student.student_id), student)
            .await
    }

    pub async fn delete_student(&self, student_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/Student/{}", student_id)).await
    }

    /// Student detail with the classroom resolved to a name, for the report.
    pub async fn student_detail(&self, student_id: i64) -> Result<StudentReportDetail, ApiError> {
        self.get_json(&format!("/api/StudentDto/{}", student_id)).await
    }

    /// Teachers and subjects covering the student's classroom, for the report.
    pub async fn student_teachers_and_subjects(
        &self,
        student_id: i64,
    ) -> Result<Vec<TeacherAndSubject>, ApiError> {
        self.get_json(&format!("/api/StudentDto/new/{}", student_id)).await
    }

    // --- teachers ---

    pub async fn list_teachers(&self) -> Result<Vec<Teacher>, ApiError> {
        self.get_json("/api/teacher").await
    }

    pub async fn create_teacher(&self, teacher: &NewTeacher) -> Result<(), ApiError> {
        self.post_unit("/api/Teacher", teacher).await
    }

    pub async fn update_teacher(&self, teacher: &Teacher) -> Result<(), ApiError> {
        self.put_unit(&format!("/api/teacher/{}", teacher.teacher_id), teacher)
            .await
    }

    pub async fn delete_teacher(&self, teacher_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/teacher/{}", teacher_id)).await
    }

    // --- classrooms ---

    pub async fn list_classrooms(&self) -> Result<Vec<Classroom>, ApiError> {
        self.get_json("/api/classrooms").await
    }

    pub async fn create_classroom(&self, classroom: &Classroom) -> Result<(), ApiError> {
        self.post_unit("/api/classrooms", classroom).await
    }

    pub async fn delete_classroom(&self, classroom_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/classrooms/{}", classroom_id)).await
    }

    // --- subjects ---

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.get_json("/api/subject").await
    }

    pub async fn create_subject(&self, subject: &Subject) -> Result<(), ApiError> {
        self.post_unit("/api/Subject", subject).await
    }

    // --- subject allocations ---

    pub async fn subject_allocations_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherSubjectAllocation>, ApiError> {
        self.get_json(&format!("/api/AllocateSubject/teacher/{}", teacher_id))
            .await
    }

    pub async fn create_subject_allocation(
        &self,
        allocation: &NewSubjectAllocation,
    ) -> Result<(), ApiError> {
        self.post_unit("/api/AllocateSubject", allocation).await
    }

    pub async fn delete_subject_allocation(&self, allocation_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/AllocateSubject/{}", allocation_id)).await
    }

    // --- classroom allocations ---

    pub async fn classroom_allocations_for_teacher(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<TeacherClassroomAllocation>, ApiError> {
        self.get_json(&format!("/api/AllocateClassroom/teacher/{}", teacher_id))
            .await
    }

    pub async fn create_classroom_allocation(
        &self,
        allocation: &NewClassroomAllocation,
    ) -> Result<(), ApiError> {
        self.post_unit("/api/AllocateClassroom", allocation).await
    }

    pub async fn delete_classroom_allocation(&self, allocation_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/api/AllocateClassroom/{}", allocation_id)).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_surfaces_server_message() {
        let error = map_failure(400, r#"{"message":"A teacher with the same ContactNo already exists."}"#);
        assert_eq!(
            error.to_string(),
            "A teacher with the same ContactNo already exists."
        );
    }

    #[test]
    fn bad_request_without_message_is_generic() {
        assert_eq!(map_failure(400, "").to_string(), "Bad request");
        assert_eq!(map_failure(400, r#"{"detail":"x"}"#).to_string(), "Bad request");
        assert_eq!(map_failure(400, r#"{"message":null}"#).to_string(), "Bad request");
    }

    #[test]
    fn status_categories_map_to_fixed_messages() {
        assert_eq!(map_failure(404, "").to_string(), "Not found");
        assert_eq!(map_failure(500, "").to_string(), "Internal server error");
        assert_eq!(map_failure(502, "").to_string(), "An error occurred");
        assert_eq!(map_failure(403, "").to_string(), "An error occurred");
    }
}
