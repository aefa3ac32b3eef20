//! reqwest-backed [`StudentService`].

use std::sync::Arc;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::models::{HealthStatus, NewStudent, Student, StudentId, StudentPage, SummaryResponse};
use crate::service::StudentService;

/// Talks to the student service over HTTP.
///
/// Cheap to clone: the reqwest client and config are shared.
#[derive(Clone, Debug)]
pub struct HttpStudentService {
    client: Client,
    config: Arc<ApiConfig>,
}

impl PartialEq for HttpStudentService {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config
    }
}

impl HttpStudentService {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Use a preconfigured reqwest client (proxies, default headers).
    pub fn with_client(config: ApiConfig, client: Client) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn students_url(&self) -> String {
        self.config.url("students")
    }

    fn student_url(&self, id: StudentId) -> String {
        self.config.url(&format!("students/{id}"))
    }

    fn summary_url(&self, id: StudentId) -> String {
        self.config.url(&format!("students/{id}/summary"))
    }
}

/// Turn a non-2xx response into [`ApiError::Remote`], keeping the body.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::remote(status.as_u16(), body))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let text = response.text().await?;
    Ok(serde_json::from_str(&text)?)
}

impl StudentService for HttpStudentService {
    async fn list_students(&self, page: u32, per_page: u32) -> Result<StudentPage> {
        tracing::debug!("GET students page={} per_page={}", page, per_page);
        let response = self
            .client
            .get(self.students_url())
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;
        decode(response).await
    }

    async fn get_student(&self, id: StudentId) -> Result<Student> {
        tracing::debug!("GET student {}", id);
        let response = self.client.get(self.student_url(id)).send().await?;
        decode(response).await
    }

    async fn create_student(&self, data: &NewStudent) -> Result<Student> {
        tracing::debug!("POST student {}", data.email);
        let response = self
            .client
            .post(self.students_url())
            .json(data)
            .send()
            .await?;
        decode(response).await
    }

    async fn update_student(&self, id: StudentId, data: &NewStudent) -> Result<Student> {
        tracing::debug!("PUT student {}", id);
        let response = self
            .client
            .put(self.student_url(id))
            .json(data)
            .send()
            .await?;
        decode(response).await
    }

    async fn delete_student(&self, id: StudentId) -> Result<()> {
        tracing::debug!("DELETE student {}", id);
        let response = self.client.delete(self.student_url(id)).send().await?;
        check_status(response).await?;
        Ok(())
    }

    async fn get_summary(&self, id: StudentId) -> Result<SummaryResponse> {
        tracing::debug!("GET summary for student {}", id);
        let response = self.client.get(self.summary_url(id)).send().await?;
        decode(response).await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.config.url("health")).send().await?;
        decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// Answer a single request with a canned JSON response; returns the base URL.
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status_line}\r\n\
                     Content-Type: application/json\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn local_service(base_url: &str) -> HttpStudentService {
        let client = Client::builder().no_proxy().build().unwrap();
        HttpStudentService::with_client(ApiConfig::new(base_url), client)
    }

    #[tokio::test]
    async fn test_error_status_keeps_body() {
        let base = serve_once("404 Not Found", r#"{"error": "Student not found"}"#);
        let err = local_service(&base).get_student(9).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::remote(404, r#"{"error": "Student not found"}"#)
        );
        assert_eq!(err.remote_messages(), vec!["Student not found".to_string()]);
    }

    #[tokio::test]
    async fn test_unexpected_body_is_decode_error() {
        let base = serve_once("200 OK", r#"{"unexpected": true}"#);
        let err = local_service(&base).list_students(1, 10).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn test_decodes_summary() {
        let base = serve_once("200 OK", r#"{"summary": "1. Bright", "source": "cache"}"#);
        let response = local_service(&base).get_summary(3).await.unwrap();
        assert_eq!(response.summary, "1. Bright");
        assert_eq!(response.source.as_deref(), Some("cache"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = local_service(&format!("http://{addr}"))
            .health()
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_endpoint_urls() {
        let service = HttpStudentService::new(ApiConfig::new("http://localhost:5001/"));
        assert_eq!(service.students_url(), "http://localhost:5001/students");
        assert_eq!(service.student_url(42), "http://localhost:5001/students/42");
        assert_eq!(
            service.summary_url(42),
            "http://localhost:5001/students/42/summary"
        );
    }
}
