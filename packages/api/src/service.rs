use crate::error::Result;
use crate::models::{HealthStatus, NewStudent, Student, StudentId, StudentPage, SummaryResponse};

/// Async interface to the student service, one method per remote operation.
///
/// Implemented by [`crate::HttpStudentService`] for the real backend and by
/// [`crate::MemoryStudentService`] for tests.
pub trait StudentService {
    fn list_students(
        &self,
        page: u32,
        per_page: u32,
    ) -> impl std::future::Future<Output = Result<StudentPage>>;
    fn get_student(
        &self,
        id: StudentId,
    ) -> impl std::future::Future<Output = Result<Student>>;
    fn create_student(
        &self,
        data: &NewStudent,
    ) -> impl std::future::Future<Output = Result<Student>>;
    fn update_student(
        &self,
        id: StudentId,
        data: &NewStudent,
    ) -> impl std::future::Future<Output = Result<Student>>;
    fn delete_student(
        &self,
        id: StudentId,
    ) -> impl std::future::Future<Output = Result<()>>;
    fn get_summary(
        &self,
        id: StudentId,
    ) -> impl std::future::Future<Output = Result<SummaryResponse>>;
    fn health(&self) -> impl std::future::Future<Output = Result<HealthStatus>>;
}
