//! # Dashboard crate: view logic for the student screens
//!
//! Everything here is plain Rust with no UI framework in sight, so every rule the
//! screens follow can be unit-tested against [`api::MemoryStudentService`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`summary`] | [`format_summary`]: turns generated text into a renumbered list |
//! | [`list`] | [`StudentList`]: page loading, per-student summary slots |
//! | [`pagination`] | [`Pagination`]: which "Previous"/"Next" controls to show |
//! | [`query`] | [`PageQuery`]: the `page`/`per_page` pair carried in the URL |
//! | [`form`] | [`StudentForm`]: create-form fields and [`ValidationError`] |

pub mod form;
pub mod list;
pub mod pagination;
pub mod query;
pub mod summary;

pub use form::{StudentForm, ValidationError};
pub use list::{
    ListView, LoadTicket, PageState, StudentList, Summary, SummarySlot, LOAD_ERROR_MESSAGE,
    SUMMARY_FALLBACK,
};
pub use pagination::{PageControl, Pagination};
pub use query::PageQuery;
pub use summary::format_summary;
