//! # API crate: client access to the student service
//!
//! Every screen of the dashboard talks to the remote student service through this
//! crate. It owns the wire types, the error taxonomy, and the [`StudentService`] seam
//! that lets the same view logic run against the real backend or an in-memory one.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | [`ApiConfig`]: base URL and default page size, from TOML or the environment |
//! | [`error`] | [`ApiError`]: transport, remote-status and decode failures |
//! | [`models`] | `Student`, `StudentPage`, `NewStudent`, `SummaryResponse`, `HealthStatus` |
//! | [`service`] | The async [`StudentService`] trait |
//! | [`http`] | [`HttpStudentService`], one reqwest call per endpoint |
//! | [`memory`] | [`MemoryStudentService`], an in-process backend for tests and demos |
//!
//! ## Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | GET | `/students?page&per_page` | `list_students` |
//! | GET | `/students/{id}` | `get_student` |
//! | POST | `/students` | `create_student` |
//! | PUT | `/students/{id}` | `update_student` |
//! | DELETE | `/students/{id}` | `delete_student` |
//! | GET | `/students/{id}/summary` | `get_summary` |
//! | GET | `/health` | `health` |
//!
//! No call retries, caches or sets a timeout: each is a single best-effort request.

pub mod config;
pub mod error;
pub mod http;
pub mod memory;
pub mod models;
pub mod service;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use http::HttpStudentService;
pub use memory::MemoryStudentService;
pub use models::{HealthStatus, NewStudent, Student, StudentId, StudentPage, SummaryResponse};
pub use service::StudentService;
