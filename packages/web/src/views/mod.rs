mod shell;
pub use shell::Shell;

mod student_index;
pub use student_index::StudentIndex;

mod create_student;
pub use create_student::CreateStudent;

mod student_details;
pub use student_details::StudentDetails;
