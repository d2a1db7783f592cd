pub mod use_allocations;
pub mod use_auth;
pub mod use_classrooms;
pub mod use_student_report;
pub mod use_students;
pub mod use_subjects;
pub mod use_teachers;
