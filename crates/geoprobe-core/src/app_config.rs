/// Which transport the geocode client uses against the service.
///
/// Chosen once per deployment via `GEOPROBE_API_MODE`, not per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMode {
    /// Direct REST endpoint: `GET /v1/geocode`.
    Rest,
    /// GraphQL gateway: `POST /gql`.
    Graphql,
}

impl std::fmt::Display for ApiMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiMode::Rest => write!(f, "rest"),
            ApiMode::Graphql => write!(f, "graphql"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub bearer_token: String,
    pub api_mode: ApiMode,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("base_url", &self.base_url)
            .field("bearer_token", &"[redacted]")
            .field("api_mode", &self.api_mode)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .finish()
    }
}
