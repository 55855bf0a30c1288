use std::time::Duration;

use serde::Deserialize;

pub static DEFAULT_NOVELAI_API_URL: &str = "https://api.novelai.net/ai/generate-image";
pub static MAX_NOVELAI_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub novelai_api_key: Option<String>,
    pub novelai_api_url: Option<String>,
    pub novelai_timeout_secs: Option<u64>,

    pub proxy_url: Option<String>,
}

impl Envy {
    /// The key exactly as configured. Whitespace-only counts as unset.
    pub fn novelai_api_key(&self) -> Option<&str> {
        self.novelai_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn novelai_api_url(&self) -> &str {
        non_empty(&self.novelai_api_url).unwrap_or(DEFAULT_NOVELAI_API_URL)
    }

    /// Upstream timeout, never above the 20 second ceiling.
    pub fn novelai_timeout(&self) -> Duration {
        let secs = self
            .novelai_timeout_secs
            .filter(|secs| *secs > 0)
            .unwrap_or(MAX_NOVELAI_TIMEOUT_SECS)
            .min(MAX_NOVELAI_TIMEOUT_SECS);

        Duration::from_secs(secs)
    }

    pub fn proxy_url(&self) -> Option<&str> {
        non_empty(&self.proxy_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_api_key_counts_as_unset() {
        let envy = Envy {
            novelai_api_key: Some("  ".to_string()),
            ..Default::default()
        };

        assert_eq!(envy.novelai_api_key(), None);
    }

    #[test]
    fn api_key_is_not_trimmed() {
        let envy = Envy {
            novelai_api_key: Some(" pst-abc ".to_string()),
            ..Default::default()
        };

        assert_eq!(envy.novelai_api_key(), Some(" pst-abc "));
    }

    #[test]
    fn api_url_falls_back_to_default() {
        let envy = Envy::default();
        assert_eq!(envy.novelai_api_url(), DEFAULT_NOVELAI_API_URL);

        let envy = Envy {
            novelai_api_url: Some("http://127.0.0.1:9000/ai/generate-image".to_string()),
            ..Default::default()
        };
        assert_eq!(
            envy.novelai_api_url(),
            "http://127.0.0.1:9000/ai/generate-image"
        );
    }

    #[test]
    fn timeout_is_clamped() {
        let envy = Envy {
            novelai_timeout_secs: Some(120),
            ..Default::default()
        };
        assert_eq!(envy.novelai_timeout(), Duration::from_secs(20));

        let envy = Envy {
            novelai_timeout_secs: Some(5),
            ..Default::default()
        };
        assert_eq!(envy.novelai_timeout(), Duration::from_secs(5));

        let envy = Envy {
            novelai_timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(envy.novelai_timeout(), Duration::from_secs(20));
    }

    #[test]
    fn reads_from_environment_pairs() {
        let vars = vec![
            ("NOVELAI_API_KEY".to_string(), "pst-abc".to_string()),
            ("PROXY_URL".to_string(), "http://proxy.local:8080".to_string()),
            ("PORT".to_string(), "8787".to_string()),
        ];

        let envy = ::envy::from_iter::<_, Envy>(vars).unwrap();

        assert_eq!(envy.novelai_api_key(), Some("pst-abc"));
        assert_eq!(envy.proxy_url(), Some("http://proxy.local:8080"));
        assert_eq!(envy.port, Some(8787));
        assert_eq!(envy.novelai_timeout_secs, None);
    }
}
