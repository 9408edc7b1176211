use async_trait::async_trait;
use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::RelayConfig;
use crate::contact::ContactRequest;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("A submission is already in progress")]
    Busy,
    #[error("Couldn't reach the email relay: {0}")]
    Network(String),
    #[error("Email relay rejected the message ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success,
    Failure(SubmitError),
}

impl From<Result<(), SubmitError>> for SubmissionResult {
    fn from(value: Result<(), SubmitError>) -> Self {
        match value {
            Ok(()) => Self::Success,
            Err(e) => Self::Failure(e),
        }
    }
}

/// Outbound transactional email provider. Futures are not `Send`: on wasm32
/// `reqwest` is backed by browser fetch.
#[async_trait(?Send)]
pub trait EmailRelay {
    async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError>;
}

/// Exactly one attempt, no retry.
pub async fn submit(relay: &impl EmailRelay, request: &ContactRequest) -> SubmissionResult {
    log::debug!("sending contact request submitted at {}", request.time_display());
    relay.send(request).await.into()
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    time: String,
}

#[derive(Debug, Serialize)]
struct SendBody<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// EmailJS REST client authenticated with the public client-side key.
#[derive(Debug, Clone)]
pub struct EmailJsClient {
    http: reqwest::Client,
    config: RelayConfig,
}

impl EmailJsClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    fn body<'a>(&'a self, request: &'a ContactRequest) -> SendBody<'a> {
        SendBody {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: TemplateParams {
                name: &request.name,
                email: &request.email,
                subject: &request.subject,
                message: &request.message,
                time: request.time_display(),
            },
        }
    }
}

impl Default for EmailJsClient {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

#[async_trait(?Send)]
impl EmailRelay for EmailJsClient {
    async fn send(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let res = self
            .http
            .post(&self.config.endpoint)
            .json(&self.body(request))
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }
        let message = res.text().await.unwrap_or_default();
        Err(SubmitError::Rejected { status, message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn request() -> ContactRequest {
        ContactRequest {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            subject: "Hi".to_string(),
            message: "Test".to_string(),
            submitted_at: Local
                .with_ymd_and_hms(2025, 1, 2, 15, 4, 5)
                .single()
                .expect("unambiguous local time"),
        }
    }

    #[test]
    fn test_body_matches_emailjs_shape() {
        let client = EmailJsClient::new(RelayConfig {
            endpoint: "http://localhost/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "pk".to_string(),
        });
        let req = request();
        let json = serde_json::to_value(client.body(&req)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pk",
                "template_params": {
                    "name": "Jo",
                    "email": "jo@x.com",
                    "subject": "Hi",
                    "message": "Test",
                    "time": "1/2/2025, 3:04:05 PM",
                }
            })
        );
    }

    #[test]
    fn test_result_conversion() {
        assert_eq!(SubmissionResult::from(Ok(())), SubmissionResult::Success);
        let err = SubmitError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "The Public Key is invalid".to_string(),
        };
        assert_eq!(
            SubmissionResult::from(Err(err.clone())),
            SubmissionResult::Failure(err)
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SubmitError::Rejected {
            status: StatusCode::BAD_REQUEST,
            message: "The Public Key is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Email relay rejected the message (400 Bad Request): The Public Key is invalid"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_failure() {
        let client = EmailJsClient::new(RelayConfig {
            endpoint: "http://127.0.0.1:9/send".to_string(),
            ..RelayConfig::default()
        });
        let result = submit(&client, &request()).await;
        assert!(matches!(
            result,
            SubmissionResult::Failure(SubmitError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_provider_error_is_rejected_with_body() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 4096];
            let mut read = Vec::new();
            // the JSON body closes with `}}`
            while !read.ends_with(b"}}") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                read.extend_from_slice(&buf[..n]);
            }
            let body = "The Public Key is invalid";
            let response = format!(
                "HTTP/1.1 400 Bad Request\r\ncontent-type: text/plain\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
            String::from_utf8_lossy(&read).into_owned()
        });

        let client = EmailJsClient::new(RelayConfig {
            endpoint: format!("http://{addr}/send"),
            ..RelayConfig::default()
        });
        let result = submit(&client, &request()).await;
        assert_eq!(
            result,
            SubmissionResult::Failure(SubmitError::Rejected {
                status: StatusCode::BAD_REQUEST,
                message: "The Public Key is invalid".to_string(),
            })
        );

        let received = server.await.unwrap();
        assert!(received.starts_with("POST /send"));
        assert!(received.contains("\"user_id\""));
    }
}
