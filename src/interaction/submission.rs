use serde::Serialize;
use thiserror::Error;

use crate::console::log_debug;

/// What a contact endpoint would receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactPayload {
    pub fn to_json(&self) -> Result<String, TransportError> {
        serde_json::to_string(self).map_err(TransportError::Encode)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to encode contact payload: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Hands a validated message to whatever delivers it.
///
/// Delivery latency is the caller's concern: the form schedules its own
/// completion timer once `send` returns.
pub trait ContactTransport {
    fn send(&self, payload: &ContactPayload) -> Result<(), TransportError>;
}

/// Encodes the payload and logs it instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedTransport;

impl ContactTransport for SimulatedTransport {
    fn send(&self, payload: &ContactPayload) -> Result<(), TransportError> {
        let body = payload.to_json()?;
        log_debug(&format!("Portfolio: simulated POST /api/contact {body}"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_json_shape() {
        let payload = ContactPayload {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: "Hi there".into(),
            message: "Line one\n\"quoted\"".into(),
        };
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hi there",
                "message": "Line one\n\"quoted\"",
            })
        );
    }
}
