//! Data models exchanged with the student service.

mod health;
mod student;

pub use health::HealthStatus;
pub use student::{
    is_valid_age, is_valid_email, is_valid_name, NewStudent, Student, StudentId, StudentPage,
    SummaryResponse, AGE_RANGE, NAME_LENGTH,
};
