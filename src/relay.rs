//! EmailJS adapter for the contact form.
//!
//! The request body is built here for both targets; only the server actually
//! talks to EmailJS.

use serde::Serialize;

use crate::contact::ContactPayload;

pub const DEFAULT_API_BASE: &str = "https://api.emailjs.com";
pub const SEND_PATH: &str = "/api/v1.0/email/send";

const DEFAULT_SERVICE_ID: &str = "service_onip9f4";
const DEFAULT_TEMPLATE_ID: &str = "template_eh9cs45";
const DEFAULT_PUBLIC_KEY: &str = "wVCXo-HLPxMNAhaf5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub api_base: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Private key sent as `accessToken`; EmailJS requires it for calls that
    /// do not come from a browser.
    pub private_key: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            service_id: DEFAULT_SERVICE_ID.to_string(),
            template_id: DEFAULT_TEMPLATE_ID.to_string(),
            public_key: DEFAULT_PUBLIC_KEY.to_string(),
            private_key: None,
        }
    }
}

impl RelayConfig {
    /// Defaults overridden by `EMAILJS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let get = |key: &str, default: String| non_blank(key).unwrap_or(default);
        Self {
            api_base: get("EMAILJS_API_BASE", defaults.api_base),
            service_id: get("EMAILJS_SERVICE_ID", defaults.service_id),
            template_id: get("EMAILJS_TEMPLATE_ID", defaults.template_id),
            public_key: get("EMAILJS_PUBLIC_KEY", defaults.public_key),
            private_key: non_blank("EMAILJS_PRIVATE_KEY"),
        }
    }

    pub fn send_url(&self) -> String {
        format!("{}{}", self.api_base.trim_end_matches('/'), SEND_PATH)
    }
}

#[derive(Debug, Serialize)]
pub struct EmailJsRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactPayload,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

impl<'a> EmailJsRequest<'a> {
    pub fn new(config: &'a RelayConfig, payload: &'a ContactPayload) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: payload,
            access_token: config.private_key.as_deref(),
        }
    }
}

#[cfg(feature = "ssr")]
pub use server::EmailJsRelay;

#[cfg(feature = "ssr")]
mod server {
    use async_trait::async_trait;

    use super::{EmailJsRequest, RelayConfig};
    use crate::contact::{ContactPayload, MailRelay, RelayError};

    pub struct EmailJsRelay {
        client: reqwest::Client,
        config: RelayConfig,
    }

    impl EmailJsRelay {
        pub fn new(config: RelayConfig) -> Self {
            Self {
                client: reqwest::Client::new(),
                config,
            }
        }
    }

    #[async_trait]
    impl MailRelay for EmailJsRelay {
        #[tracing::instrument(skip_all, fields(service = %self.config.service_id))]
        async fn send(&self, payload: &ContactPayload) -> Result<(), RelayError> {
            let body = EmailJsRequest::new(&self.config, payload);
            let res = self
                .client
                .post(self.config.send_url())
                .json(&body)
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;

            let status = res.status();
            if status.is_success() {
                tracing::debug!(%status, "relay accepted message");
                return Ok(());
            }
            let body = match res.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(%status, error = %e, "failed to read relay response body");
                    String::new()
                }
            };
            tracing::warn!(%status, %body, "relay rejected message");
            Err(RelayError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            subject: "S".to_string(),
            message: "M".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let config = RelayConfig::default();
        let payload = payload();
        let body = serde_json::to_value(EmailJsRequest::new(&config, &payload)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "service_id": "service_onip9f4",
                "template_id": "template_eh9cs45",
                "user_id": "wVCXo-HLPxMNAhaf5",
                "template_params": {
                    "name": "A",
                    "email": "a@b.com",
                    "subject": "S",
                    "message": "M",
                },
            })
        );
    }

    #[test]
    fn test_env_overrides() {
        let vars = HashMap::from([
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_API_BASE", "http://localhost:9000/"),
            ("EMAILJS_TEMPLATE_ID", "  "),
        ]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.service_id, "svc");
        assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(config.public_key, DEFAULT_PUBLIC_KEY);
        assert_eq!(config.private_key, None);
        assert_eq!(config.send_url(), "http://localhost:9000/api/v1.0/email/send");
    }

    #[test]
    fn test_private_key_sent_as_access_token() {
        let vars = HashMap::from([("EMAILJS_PRIVATE_KEY", "priv-123")]);
        let config = RelayConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.private_key.as_deref(), Some("priv-123"));

        let payload = payload();
        let body = serde_json::to_value(EmailJsRequest::new(&config, &payload)).unwrap();
        assert_eq!(body["accessToken"], "priv-123");
        assert_eq!(body["user_id"], DEFAULT_PUBLIC_KEY);
    }

    #[test]
    fn test_default_send_url() {
        assert_eq!(
            RelayConfig::default().send_url(),
            "https://api.emailjs.com/api/v1.0/email/send"
        );
    }

    #[cfg(feature = "ssr")]
    mod ssr {
        use super::*;
        use crate::contact::{deliver, RelayError};
        use httpmock::prelude::*;

        fn config_for(server: &MockServer) -> RelayConfig {
            RelayConfig {
                api_base: server.base_url(),
                ..RelayConfig::default()
            }
        }

        #[tokio::test]
        async fn test_send_posts_payload() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path(SEND_PATH)
                        .json_body(serde_json::json!({
                            "service_id": "service_onip9f4",
                            "template_id": "template_eh9cs45",
                            "user_id": "wVCXo-HLPxMNAhaf5",
                            "template_params": {
                                "name": "A",
                                "email": "a@b.com",
                                "subject": "S",
                                "message": "M",
                            },
                        }));
                    then.status(200).body("OK");
                })
                .await;

            let relay = EmailJsRelay::new(config_for(&server));
            deliver(&relay, payload()).await.unwrap();
            mock.assert_hits_async(1).await;
        }

        #[tokio::test]
        async fn test_send_includes_access_token() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST)
                        .path(SEND_PATH)
                        .json_body_partial(r#"{ "accessToken": "priv-123" }"#);
                    then.status(200).body("OK");
                })
                .await;

            let relay = EmailJsRelay::new(RelayConfig {
                private_key: Some("priv-123".to_string()),
                ..config_for(&server)
            });
            deliver(&relay, payload()).await.unwrap();
            mock.assert_hits_async(1).await;
        }

        #[tokio::test]
        async fn test_rejection_maps_status() {
            let server = MockServer::start_async().await;
            let mock = server
                .mock_async(|when, then| {
                    when.method(POST).path(SEND_PATH);
                    then.status(400).body("The service ID is invalid");
                })
                .await;

            let relay = EmailJsRelay::new(config_for(&server));
            let err = deliver(&relay, payload()).await.unwrap_err();
            assert_eq!(
                err,
                RelayError::Rejected {
                    status: http::StatusCode::BAD_REQUEST,
                    body: "The service ID is invalid".to_string(),
                }
            );
            mock.assert_hits_async(1).await;
        }
    }
}
