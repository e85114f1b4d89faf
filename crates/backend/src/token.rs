//! Token fabrication.
//!
//! Session tokens are opaque random strings the front-end stores and sends
//! back; nothing ever validates them - the session slot alone decides who is
//! logged in. The settlement token only has to look like a JWT on the
//! receipt page.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use chrono::Utc;
use pizza_stand_core::OrderId;
use rand::RngCore as _;

/// Byte length of a session token before encoding.
const SESSION_TOKEN_BYTES: usize = 24;

/// A fresh opaque session token.
#[must_use]
pub fn session() -> String {
    let mut bytes = [0u8; SESSION_TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// A fabricated settlement token for an order receipt.
///
/// Three base64 segments so it renders like a JWT; the signature segment is
/// random bytes, signed by nobody.
#[must_use]
pub fn settlement(order: OrderId) -> String {
    let header = STANDARD_NO_PAD.encode(br#"{"alg":"none","typ":"JWT"}"#);
    let claims = STANDARD_NO_PAD.encode(format!(
        r#"{{"iat":{},"ord":{order}}}"#,
        Utc::now().timestamp()
    ));

    let mut sig_bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut sig_bytes);
    let signature = URL_SAFE_NO_PAD.encode(sig_bytes);

    format!("{header}.{claims}.{signature}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_tokens_are_unique() {
        let a = session();
        let b = session();
        assert_ne!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_session_token_is_url_safe() {
        let token = session();
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_settlement_token_looks_like_a_jwt() {
        let token = settlement(OrderId::new(23));
        assert!(token.starts_with("eyJ"));
        assert_eq!(token.split('.').count(), 3);
    }
}
