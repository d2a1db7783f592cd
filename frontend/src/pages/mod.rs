pub mod allocate_classrooms;
pub mod allocate_subjects;
pub mod classrooms;
pub mod home;
pub mod login;
pub mod student_report;
pub mod students;
pub mod subjects;
pub mod teachers;
