use serde::{Deserialize, Serialize};

/// A teacher as returned by `GET /api/teacher`.
///
/// The backend's JSON casing is uneven (`teacherID` but `classroomId`);
/// the serde renames below pin the exact wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "teacherID")]
    pub teacher_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

/// Payload for `POST /api/Teacher`; the id is assigned server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTeacher {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
}

/// A student as returned by `GET /api/student`.
///
/// `age` is computed client-side from `date_of_birth` at submission time
/// and stored as-is; it is not recomputed by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "studentID")]
    pub student_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    /// Date of birth in `YYYY-MM-DD` form.
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub age: i32,
    #[serde(rename = "classroomID")]
    pub classroom_id: i64,
}

/// Payload for `POST /api/Student`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
    pub age: i32,
    #[serde(rename = "classroomID")]
    pub classroom_id: i64,
}

/// A classroom. Creation posts the same shape with `classroomId: 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    #[serde(rename = "classroomId")]
    pub classroom_id: i64,
    #[serde(rename = "classroomName")]
    pub classroom_name: String,
}

/// A subject. Creation posts the same shape with `subjectId: 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
}

/// One teacher-to-subject link, as returned by
/// `GET /api/AllocateSubject/teacher/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherSubjectAllocation {
    #[serde(rename = "allocateSubjectID")]
    pub allocate_subject_id: i64,
    #[serde(rename = "teacherID")]
    pub teacher_id: i64,
    #[serde(rename = "subjectID")]
    pub subject_id: i64,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
}

/// Payload for `POST /api/AllocateSubject`. The (teacher, subject) pair
/// is unique server-side; duplicates are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSubjectAllocation {
    #[serde(rename = "teacherId")]
    pub teacher_id: i64,
    #[serde(rename = "subjectId")]
    pub subject_id: i64,
}

/// One teacher-to-classroom link, as returned by
/// `GET /api/AllocateClassroom/teacher/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherClassroomAllocation {
    #[serde(rename = "allocateClassroomID")]
    pub allocate_classroom_id: i64,
    #[serde(rename = "teacherID")]
    pub teacher_id: i64,
    #[serde(rename = "classroomID")]
    pub classroom_id: i64,
    #[serde(rename = "classroomName")]
    pub classroom_name: String,
}

/// Payload for `POST /api/AllocateClassroom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewClassroomAllocation {
    #[serde(rename = "teacherId")]
    pub teacher_id: i64,
    #[serde(rename = "classroomId")]
    pub classroom_id: i64,
}

/// Student detail for the report screen (`GET /api/StudentDto/{id}`),
/// with the classroom already resolved to its name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentReportDetail {
    #[serde(rename = "studentID")]
    pub student_id: i64,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "contactPerson")]
    pub contact_person: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    #[serde(rename = "classroomName")]
    pub classroom_name: String,
    #[serde(rename = "emailAddress")]
    pub email_address: String,
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

/// One derived teacher/subject row for the report screen
/// (`GET /api/StudentDto/new/{id}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherAndSubject {
    #[serde(rename = "teacherFirstName")]
    pub teacher_first_name: String,
    #[serde(rename = "teacherLastName")]
    pub teacher_last_name: String,
    #[serde(rename = "subjectName")]
    pub subject_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from `POST /api/auth/login`. The token is displayed-and-dropped:
/// the client does not attach it to subsequent requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_uses_backend_field_casing() {
        let teacher = Teacher {
            teacher_id: 3,
            first_name: "Maya".into(),
            last_name: "Perera".into(),
            contact_no: "0771234567".into(),
            email_address: "maya@example.com".into(),
        };
        let value = serde_json::to_value(&teacher).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert!(keys.contains(&"teacherID"));
        assert!(keys.contains(&"firstName"));
        assert!(keys.contains(&"emailAddress"));
        assert!(!keys.contains(&"teacher_id"));
    }

    #[test]
    fn allocation_record_and_request_casings_differ() {
        // The list endpoint returns `allocateSubjectID`/`subjectID`, while the
        // create payload uses `teacherId`/`subjectId`. Both must survive as-is.
        let record = TeacherSubjectAllocation {
            allocate_subject_id: 11,
            teacher_id: 3,
            subject_id: 7,
            subject_name: "Maths".into(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("allocateSubjectID").is_some());
        assert!(value.get("subjectID").is_some());

        let request = NewSubjectAllocation { teacher_id: 3, subject_id: 7 };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("teacherId").is_some());
        assert!(value.get("subjectId").is_some());
    }

    #[test]
    fn classroom_round_trips_lower_camel_id() {
        let json = r#"{"classroomId":4,"classroomName":"Room A"}"#;
        let classroom: Classroom = serde_json::from_str(json).unwrap();
        assert_eq!(classroom.classroom_id, 4);
        assert_eq!(classroom.classroom_name, "Room A");
        assert_eq!(serde_json::to_string(&classroom).unwrap(), json);
    }
}
