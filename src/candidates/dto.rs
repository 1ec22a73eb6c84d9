use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

/// Metadata half of the add-details multipart upload, sent as a JSON-encoded
/// `data` field next to the `cv` file field.
#[derive(Debug, Deserialize)]
pub struct DetailsPayload {
    pub name: String,
    pub email: String,
    pub exp: Experience,
}

/// Clients send experience either as free text ("5 years") or as a bare
/// number; both are stored as text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Experience {
    Text(String),
    Years(f64),
}

impl Experience {
    pub fn as_text(&self) -> String {
        match self {
            Experience::Text(s) => s.clone(),
            Experience::Years(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            Experience::Years(n) => format!("{}", n),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub approved: bool,
}

/// One row of the admin listing. The CV bytes ride along in full; there is
/// no pagination on this endpoint.
#[derive(Debug, Serialize)]
pub struct UserDetailsItem {
    pub name: String,
    pub email: String,
    pub exp: String,
    pub cv: ByteBuf,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_payload_accepts_numeric_experience() {
        let payload: DetailsPayload =
            serde_json::from_str(r#"{"name":"Bob","email":"bob@example.com","exp":3}"#).unwrap();
        assert_eq!(payload.exp.as_text(), "3");
    }

    #[test]
    fn details_payload_accepts_text_experience() {
        let payload: DetailsPayload =
            serde_json::from_str(r#"{"name":"Bob","email":"bob@example.com","exp":"5 years"}"#)
                .unwrap();
        assert_eq!(payload.exp.as_text(), "5 years");
    }

    #[test]
    fn listing_item_serializes_cv_as_byte_array() {
        let item = UserDetailsItem {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            exp: "3".into(),
            cv: ByteBuf::from(vec![37, 80, 68, 70]),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""cv":[37,80,68,70]"#));
    }

    #[test]
    fn approval_response_shape() {
        let json = serde_json::to_string(&ApprovalResponse { approved: false }).unwrap();
        assert_eq!(json, r#"{"approved":false}"#);
    }
}
