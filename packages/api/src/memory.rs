//! In-process [`StudentService`] with the backend's semantics.
//!
//! Ids are assigned sequentially from 1, timestamps are taken from the local clock,
//! pages are slices of the records in id order with
//! `total_pages = ceil(total / per_page)`, invalid bodies are rejected with a 400
//! `{"errors": [...]}` body and unknown ids with a 404. Summaries are generated
//! from the record as a four-point numbered list.
//!
//! Failure injection (`set_offline`, `fail_summary_for`) and the summary call
//! counter exist for tests.

use std::collections::{BTreeMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{ApiError, Result};
use crate::models::{HealthStatus, NewStudent, Student, StudentId, StudentPage, SummaryResponse};
use crate::service::StudentService;

#[derive(Debug)]
struct Inner {
    students: BTreeMap<StudentId, Student>,
    next_id: StudentId,
    offline: bool,
    failing_summaries: HashSet<StudentId>,
    summary_calls: usize,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            students: BTreeMap::new(),
            next_id: 1,
            offline: false,
            failing_summaries: HashSet::new(),
            summary_calls: 0,
        }
    }
}

/// In-memory student service for testing and offline demos.
#[derive(Clone, Debug, Default)]
pub struct MemoryStudentService {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStudentService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service pre-populated with the given records.
    pub fn with_students(students: impl IntoIterator<Item = NewStudent>) -> Self {
        let service = Self::new();
        {
            let mut inner = service.lock();
            for data in students {
                insert(&mut inner, data);
            }
        }
        service
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make every call fail with a transport error until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    /// Make summary generation for `id` fail with a 500.
    pub fn fail_summary_for(&self, id: StudentId) {
        self.lock().failing_summaries.insert(id);
    }

    /// Number of summary requests received so far.
    pub fn summary_calls(&self) -> usize {
        self.lock().summary_calls
    }

    fn connected(&self) -> Result<MutexGuard<'_, Inner>> {
        let inner = self.lock();
        if inner.offline {
            return Err(ApiError::Transport("service unreachable".to_string()));
        }
        Ok(inner)
    }
}

fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

fn insert(inner: &mut Inner, data: NewStudent) -> Student {
    let timestamp = now();
    let student = Student {
        id: inner.next_id,
        name: data.name,
        age: data.age,
        email: data.email,
        created_at: timestamp,
        updated_at: timestamp,
    };
    inner.students.insert(student.id, student.clone());
    inner.next_id += 1;
    student
}

fn reject_invalid(data: &NewStudent) -> Result<()> {
    let errors = data.problems();
    if errors.is_empty() {
        return Ok(());
    }
    let body = serde_json::json!({ "errors": errors }).to_string();
    Err(ApiError::remote(400, body))
}

fn summarize(student: &Student) -> String {
    format!(
        "Here is a summary for {name}:\n\n\
         1. **Potential:** {name} shows steady academic promise.\n\
         2. **Growth:** At {age}, building consistent study habits matters most.\n\
         3. **Next steps:** Set weekly goals and review them with a mentor.\n\
         4. **Encouragement:** Keep going, {name}; progress compounds.",
        name = student.name,
        age = student.age,
    )
}

impl StudentService for MemoryStudentService {
    async fn list_students(&self, page: u32, per_page: u32) -> Result<StudentPage> {
        let inner = self.connected()?;
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = inner.students.len() as u64;
        let total_pages = total.div_ceil(u64::from(per_page)) as u32;
        let start = (page as usize - 1).saturating_mul(per_page as usize);
        let students = inner
            .students
            .values()
            .skip(start)
            .take(per_page as usize)
            .cloned()
            .collect();
        Ok(StudentPage {
            students,
            total,
            total_pages,
            page: Some(page),
            per_page: Some(per_page),
        })
    }

    async fn get_student(&self, id: StudentId) -> Result<Student> {
        let inner = self.connected()?;
        inner.students.get(&id).cloned().ok_or(ApiError::NotFound(id))
    }

    async fn create_student(&self, data: &NewStudent) -> Result<Student> {
        let mut inner = self.connected()?;
        reject_invalid(data)?;
        Ok(insert(&mut inner, data.clone()))
    }

    async fn update_student(&self, id: StudentId, data: &NewStudent) -> Result<Student> {
        let mut inner = self.connected()?;
        if !inner.students.contains_key(&id) {
            return Err(ApiError::NotFound(id));
        }
        reject_invalid(data)?;
        let student = inner.students.get_mut(&id).ok_or(ApiError::NotFound(id))?;
        student.name = data.name.clone();
        student.age = data.age;
        student.email = data.email.clone();
        student.updated_at = now();
        Ok(student.clone())
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        let mut inner = self.connected()?;
        inner
            .students
            .remove(&id)
            .map(|_| ())
            .ok_or(ApiError::NotFound(id))
    }

    async fn get_summary(&self, id: StudentId) -> Result<SummaryResponse> {
        let mut inner = self.connected()?;
        inner.summary_calls += 1;
        let student = inner.students.get(&id).ok_or(ApiError::NotFound(id))?;
        if inner.failing_summaries.contains(&id) {
            let body = r#"{"error": "Failed to generate summary"}"#;
            return Err(ApiError::remote(500, body));
        }
        Ok(SummaryResponse {
            summary: summarize(student),
            student_id: Some(id),
            source: Some("memory".to_string()),
            model: None,
            generated_at: Some(now().format("%Y-%m-%dT%H:%M:%S").to_string()),
        })
    }

    async fn health(&self) -> Result<HealthStatus> {
        drop(self.connected()?);
        Ok(HealthStatus {
            status: "healthy".to_string(),
            timestamp: Some(now().format("%Y-%m-%dT%H:%M:%S").to_string()),
            version: Some(env!("CARGO_PKG_VERSION").to_string()),
        })
    }
}
