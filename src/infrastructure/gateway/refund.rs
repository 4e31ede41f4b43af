//! Refund gateway HTTP client
//!
//! Calls the payment processor's refund function. The wire contract is a
//! single POST with `{action: "process-refund", bookingId, refundAmount,
//! currency}` answered by `{success: bool}`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::application::ports::{RefundGateway, RefundRequest, RefundResult};
use crate::config::RefundGatewaySettings;
use crate::domain::{DomainError, DomainResult};

/// Production refund gateway talking to the configured HTTP endpoint.
#[derive(Clone)]
pub struct HttpRefundGateway {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Serialize)]
struct ProcessRefundBody<'a> {
    action: &'a str,
    #[serde(rename = "bookingId")]
    booking_id: &'a str,
    #[serde(rename = "refundAmount")]
    refund_amount: i64,
    currency: &'a str,
}

#[derive(Debug, Deserialize)]
struct ProcessRefundResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

impl HttpRefundGateway {
    pub fn new(settings: &RefundGatewaySettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("reqwest client with static config");
        Self {
            client,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

#[async_trait]
impl RefundGateway for HttpRefundGateway {
    async fn process_refund(&self, request: RefundRequest) -> DomainResult<RefundResult> {
        let body = ProcessRefundBody {
            action: "process-refund",
            booking_id: &request.booking_id,
            refund_amount: request.amount,
            currency: &request.currency,
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Gateway(format!("refund call failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| DomainError::Gateway(format!("refund response unreadable: {}", e)))?;

        tracing::debug!(status = %status, body = %text, "Refund function response");

        if !status.is_success() {
            return Err(DomainError::Gateway(format!(
                "refund endpoint returned {}: {}",
                status, text
            )));
        }

        let parsed: ProcessRefundResponse = serde_json::from_str(&text)
            .map_err(|e| DomainError::Gateway(format!("refund response malformed: {}", e)))?;

        if parsed.success {
            tracing::info!(
                booking_id = %request.booking_id,
                amount = request.amount,
                currency = %request.currency,
                "Refund accepted by gateway"
            );
        } else {
            tracing::warn!(
                booking_id = %request.booking_id,
                message = parsed.message.as_deref().unwrap_or("-"),
                "Refund declined by gateway"
            );
        }

        Ok(RefundResult {
            success: parsed.success,
            message: parsed.message,
        })
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(server: &MockServer) -> RefundGatewaySettings {
        RefundGatewaySettings {
            base_url: format!("{}/functions/payment", server.uri()),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        }
    }

    fn request() -> RefundRequest {
        RefundRequest {
            booking_id: "booking-1".to_string(),
            amount: 5_000,
            currency: "MVR".to_string(),
        }
    }

    #[tokio::test]
    async fn accepted_refund_returns_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/functions/payment"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(serde_json::json!({
                "action": "process-refund",
                "bookingId": "booking-1",
                "refundAmount": 5000,
                "currency": "MVR",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = HttpRefundGateway::new(&settings(&server));
        let result = gateway.process_refund(request()).await.unwrap();
        assert!(result.success);
    }

    #[tokio::test]
    async fn declined_refund_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": false,
                "message": "already refunded",
            })))
            .mount(&server)
            .await;

        let gateway = HttpRefundGateway::new(&settings(&server));
        let result = gateway.process_refund(request()).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.message.as_deref(), Some("already refunded"));
    }

    #[tokio::test]
    async fn server_error_is_a_gateway_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let gateway = HttpRefundGateway::new(&settings(&server));
        let err = gateway.process_refund(request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Gateway(_)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_gateway_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let gateway = HttpRefundGateway::new(&settings(&server));
        let err = gateway.process_refund(request()).await.unwrap_err();
        assert!(matches!(err, DomainError::Gateway(_)));
    }
}
