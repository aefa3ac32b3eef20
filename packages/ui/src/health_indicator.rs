//! Reachability indicator for the student service.

use api::StudentService;
use dioxus::prelude::*;

use crate::service::use_student_service;

/// Seconds between health checks.
const CHECK_INTERVAL_SECS: u64 = 30;

/// Last known state of the student service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Health {
    Checking,
    Online,
    Offline,
}

/// A small dot that shows whether the student service answers `/health`.
///
/// - **Online**: green ("Service online")
/// - **Offline**: red ("Service unreachable")
/// - **Checking**: gray, until the first check completes
#[component]
pub fn HealthIndicator() -> Element {
    let service = use_student_service();
    let mut health = use_signal(|| Health::Checking);

    use_effect(move || {
        let service = service.clone();
        spawn(async move {
            loop {
                let next = match service.health().await {
                    Ok(status) if status.is_healthy() => Health::Online,
                    Ok(status) => {
                        tracing::warn!("Student service reports status '{}'", status.status);
                        Health::Offline
                    }
                    Err(e) => {
                        tracing::warn!("Health check failed: {}", e);
                        Health::Offline
                    }
                };
                if *health.peek() != next {
                    health.set(next);
                }

                #[cfg(target_arch = "wasm32")]
                gloo_timers::future::sleep(std::time::Duration::from_secs(CHECK_INTERVAL_SECS))
                    .await;
                #[cfg(not(target_arch = "wasm32"))]
                tokio::time::sleep(std::time::Duration::from_secs(CHECK_INTERVAL_SECS)).await;
            }
        });
    });

    let (class, title) = match health() {
        Health::Checking => ("health-indicator health-indicator--checking", "Checking service..."),
        Health::Online => ("health-indicator health-indicator--online", "Service online"),
        Health::Offline => ("health-indicator health-indicator--offline", "Service unreachable"),
    };

    rsx! {
        span {
            class: "{class}",
            title: "{title}",
        }
    }
}
