//! Request signing.
//!
//! Every call carries an HMAC-SHA256 signature keyed with the client
//! secret over:
//!
//! ```text
//! client_id + [access_token] + t + nonce + string_to_sign
//! ```
//!
//! where `string_to_sign` is the method, the hex SHA-256 of the body, an
//! empty signature-header list and the path with its sorted query, joined
//! by newlines.

use hmac::{Hmac, Mac};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use sha2::{Digest, Sha256};

use tuya_core::error::InvalidInputError;
use tuya_core::{AccessToken, Credentials, HttpMethod, Result};

type HmacSha256 = Hmac<Sha256>;

/// Value of the `sign_method` header.
pub const SIGN_METHOD: &str = "HMAC-SHA256";

/// Signs requests with a project's credentials.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

/// The authentication headers of one signed request.
#[derive(Clone)]
pub struct SignedHeaders {
    pub client_id: String,
    pub t: String,
    pub nonce: String,
    pub sign: String,
    pub access_token: Option<String>,
}

impl RequestSigner {
    /// Create a signer for the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Returns the client id requests are signed for.
    pub fn client_id(&self) -> &str {
        self.credentials.client_id()
    }

    /// Sign one request.
    ///
    /// `t` is the request time in milliseconds since the epoch; `nonce` must
    /// be unique per request.
    pub fn sign(
        &self,
        method: HttpMethod,
        path: &str,
        body: &[u8],
        token: Option<&AccessToken>,
        t: i64,
        nonce: &str,
    ) -> Result<SignedHeaders> {
        let t = t.to_string();
        let token = token.map(AccessToken::as_str);
        let sign = self.signature(
            token,
            &t,
            nonce,
            &string_to_sign(method.as_str(), path, body),
        )?;

        Ok(SignedHeaders {
            client_id: self.client_id().to_string(),
            t,
            nonce: nonce.to_string(),
            sign,
            access_token: token.map(str::to_string),
        })
    }

    /// Compute the upper-case hex signature over a prepared string to sign.
    pub fn signature(
        &self,
        token: Option<&str>,
        t: &str,
        nonce: &str,
        string_to_sign: &str,
    ) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(self.credentials.client_secret().as_bytes())
            .map_err(|e| InvalidInputError::Other {
                message: format!("unusable client secret: {}", e),
            })?;

        mac.update(self.client_id().as_bytes());
        if let Some(token) = token {
            mac.update(token.as_bytes());
        }
        mac.update(t.as_bytes());
        mac.update(nonce.as_bytes());
        mac.update(string_to_sign.as_bytes());

        Ok(to_hex(&mac.finalize().into_bytes()).to_uppercase())
    }
}

impl SignedHeaders {
    /// Convert into request headers.
    pub fn into_header_map(self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(6);
        insert(&mut headers, "client_id", &self.client_id)?;
        insert(&mut headers, "t", &self.t)?;
        insert(&mut headers, "nonce", &self.nonce)?;
        insert(&mut headers, "sign_method", SIGN_METHOD)?;
        insert(&mut headers, "sign", &self.sign)?;
        if let Some(token) = &self.access_token {
            insert(&mut headers, "access_token", token)?;
        }
        Ok(headers)
    }
}

// Hide token value in Debug output
impl std::fmt::Debug for SignedHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("client_id", &self.client_id)
            .field("t", &self.t)
            .field("nonce", &self.nonce)
            .field("sign", &self.sign)
            .field("access_token", &self.access_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Build the string to sign for a request.
///
/// Query parameters are sorted by name, as the cloud does when verifying.
pub fn string_to_sign(method: &str, path: &str, body: &[u8]) -> String {
    format!(
        "{}\n{}\n\n{}",
        method,
        to_hex(&Sha256::digest(body)),
        canonical_path(path)
    )
}

fn canonical_path(path: &str) -> String {
    match path.split_once('?') {
        Some((base, query)) if !query.is_empty() => {
            let mut params: Vec<&str> = query.split('&').filter(|p| !p.is_empty()).collect();
            params.sort_by(|a, b| param_name(a).cmp(param_name(b)));
            format!("{}?{}", base, params.join("&"))
        }
        Some((base, _)) => base.to_string(),
        None => path.to_string(),
    }
}

fn param_name(param: &str) -> &str {
    param.split_once('=').map_or(param, |(name, _)| name)
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(|_| InvalidInputError::Other {
        message: format!("header '{}' contains invalid characters", name),
    })?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const T: i64 = 1588925778000;
    const NONCE: &str = "5138cc3a9033d69856923fd07b491173";

    fn signer() -> RequestSigner {
        RequestSigner::new(Credentials::new("client-123", "secret-456"))
    }

    #[test]
    fn string_to_sign_for_empty_body() {
        assert_eq!(
            string_to_sign("GET", "/v1.0/token?grant_type=1", b""),
            format!("GET\n{}\n\n/v1.0/token?grant_type=1", EMPTY_SHA256)
        );
    }

    #[test]
    fn query_parameters_are_sorted() {
        assert_eq!(
            canonical_path("/v1.0/devices?page_size=20&last_row_key=abc"),
            "/v1.0/devices?last_row_key=abc&page_size=20"
        );
        assert_eq!(canonical_path("/v1.0/devices?"), "/v1.0/devices");
    }

    #[test]
    fn token_grant_signature() {
        let headers = signer()
            .sign(HttpMethod::Get, "/v1.0/token?grant_type=1", b"", None, T, NONCE)
            .unwrap();

        assert_eq!(
            headers.sign,
            "7F2D7557A6DC9AE1CA8D53DECE60BA64117BB5B52A14B80719C6AE3A59C878E1"
        );
        assert_eq!(headers.t, "1588925778000");
        assert!(headers.access_token.is_none());
    }

    #[test]
    fn business_request_signature_includes_token_and_body() {
        let body = br#"{"commands":[{"code":"switch_led","value":true}]}"#;
        let token = AccessToken::new("tok-A");
        let headers = signer()
            .sign(
                HttpMethod::Post,
                "/v1.0/devices/dev-1/commands",
                body,
                Some(&token),
                T,
                NONCE,
            )
            .unwrap();

        assert_eq!(
            headers.sign,
            "BFAA8E562B54741AC4D844E75ABC81881553B1CCB18D531D7BC16CC763F26AC2"
        );
        assert_eq!(headers.access_token.as_deref(), Some("tok-A"));
    }

    #[test]
    fn header_map_contains_signature_headers() {
        let token = AccessToken::new("tok-A");
        let map = signer()
            .sign(HttpMethod::Get, "/v1.0/devices/x", b"", Some(&token), T, NONCE)
            .unwrap()
            .into_header_map()
            .unwrap();

        assert_eq!(map["client_id"], "client-123");
        assert_eq!(map["sign_method"], SIGN_METHOD);
        assert_eq!(map["nonce"], NONCE);
        assert_eq!(map["access_token"], "tok-A");
        assert_eq!(map["sign"].len(), 64);
    }

    #[test]
    fn invalid_token_characters_are_rejected() {
        let token = AccessToken::new("bad\ntoken");
        let result = signer()
            .sign(HttpMethod::Get, "/v1.0/devices/x", b"", Some(&token), T, NONCE)
            .unwrap()
            .into_header_map();
        assert!(result.is_err());
    }

    #[test]
    fn debug_hides_access_token() {
        let token = AccessToken::new("super-secret-token");
        let headers = signer()
            .sign(HttpMethod::Get, "/v1.0/devices/x", b"", Some(&token), T, NONCE)
            .unwrap();
        assert!(!format!("{:?}", headers).contains("super-secret-token"));
    }
}
