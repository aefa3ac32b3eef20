//! Student service context for the UI.

use api::{ApiConfig, HttpStudentService};
use dioxus::prelude::*;

/// Get the student service provided by [`ApiProvider`].
pub fn use_student_service() -> HttpStudentService {
    use_context::<HttpStudentService>()
}

/// Get the configuration the student service was built with.
pub fn use_api_config() -> ApiConfig {
    use_student_service().config().clone()
}

/// Provider component that builds the student service from the environment.
/// Wrap your app with this component before rendering any student view.
#[component]
pub fn ApiProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!("Using student service at {}", config.base_url);
        HttpStudentService::new(config)
    });

    rsx! {
        {children}
    }
}
