/// Per-deployment settings for the assistant. The same component tree ships
/// in two deployments that differ only in page copy and in where the
/// answering service lives; everything that varies between them is here.
#[derive(Clone)]
pub struct AppConfig {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Answering endpoint: a same-origin path or a host-qualified URL.
    pub endpoint: String,
    /// Shown as one-click suggestions while the transcript is empty.
    /// Clicking one fills the composer, it does not submit.
    pub sample_queries: &'static [&'static str],
    /// Fixed message for failed requests. Never derived from the underlying
    /// failure; the detail is only logged.
    pub error_message: &'static str,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::same_origin()
    }
}

impl AppConfig {
    /// Standard deployment: the answering service is served from the same
    /// origin as the page.
    pub fn same_origin() -> Self {
        Self {
            title: "HVAC Technical Assistant",
            subtitle: "Smart HVAC (heating, ventilation and air conditioning) guidance \
                       sourced from verified technical publications and engineering documents",
            endpoint: "/api/chat".to_string(),
            sample_queries: &[
                "What is an HVAC system?",
                "What HVAC system is best suited for a pharmaceutical lab?",
            ],
            error_message: "Sorry, something went wrong. Try again or check if your \
                            question relates to HVAC systems.",
        }
    }

    /// Deployment where the answering service runs on a separate host.
    #[allow(dead_code)]
    pub fn hosted(base_url: &str) -> Self {
        Self {
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            error_message: "Sorry, something went wrong. Please try again.",
            ..Self::same_origin()
        }
    }
}
