use std::path::PathBuf;

/// How the normalizer treats follower counts that cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FollowersPolicy {
    /// Any unparseable follower count, including the `"Not Found"`
    /// sentinel, fails normalization.
    #[default]
    Strict,
    /// `"Not Found"` becomes `0`; other unparseable values become `None`.
    Lenient,
}

impl std::fmt::Display for FollowersPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FollowersPolicy::Strict => write!(f, "strict"),
            FollowersPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub user_agent: String,
    pub llm_base_url: String,
    pub llm_api_key: Option<String>,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub selectors_path: Option<PathBuf>,
    pub prompt_path: Option<PathBuf>,
    pub followers_policy: FollowersPolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("user_agent", &self.user_agent)
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_api_key", &self.llm_api_key.as_ref().map(|_| "[redacted]"))
            .field("llm_model", &self.llm_model)
            .field("llm_temperature", &self.llm_temperature)
            .field("selectors_path", &self.selectors_path)
            .field("prompt_path", &self.prompt_path)
            .field("followers_policy", &self.followers_policy)
            .finish()
    }
}
