mod student_list;
pub use student_list::StudentListView;

mod student_form;
pub use student_form::StudentFormView;

mod student_detail;
pub use student_detail::StudentDetailView;
