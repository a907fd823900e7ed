//! Assembly of signed GET requests.

use http::header::{HeaderName, CONTENT_ENCODING, CONTENT_TYPE};
use url::Url;

use crate::constants::{
    CONTENT_ENCODING_UTF8, CONTENT_TYPE_FORM_URLENCODED, HEADER_X_NEXMO_SDK_OS_FAMILY,
    HEADER_X_NEXMO_SDK_OS_REVISION, HEADER_X_NEXMO_SDK_REVISION,
};

use super::identity::ClientIdentity;
use super::signing::{build_signed_parameters, build_signed_parameters_at, ParameterSet};

/// A signed call to one endpoint, built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    endpoint: Url,
    params: ParameterSet,
    headers: Vec<(HeaderName, String)>,
}

impl SignedRequest {
    #[must_use]
    pub fn new(endpoint: &Url, caller_params: &ParameterSet, identity: &ClientIdentity) -> Self {
        Self::from_signed(
            endpoint,
            build_signed_parameters(caller_params, identity),
            identity,
        )
    }

    #[must_use]
    pub fn new_at(
        endpoint: &Url,
        caller_params: &ParameterSet,
        identity: &ClientIdentity,
        timestamp: i64,
    ) -> Self {
        Self::from_signed(
            endpoint,
            build_signed_parameters_at(caller_params, identity, timestamp),
            identity,
        )
    }

    fn from_signed(endpoint: &Url, params: ParameterSet, identity: &ClientIdentity) -> Self {
        let headers = vec![
            (CONTENT_TYPE, CONTENT_TYPE_FORM_URLENCODED.to_owned()),
            (CONTENT_ENCODING, CONTENT_ENCODING_UTF8.to_owned()),
            (HEADER_X_NEXMO_SDK_OS_FAMILY, identity.os_family().to_owned()),
            (
                HEADER_X_NEXMO_SDK_OS_REVISION,
                identity.os_revision().to_owned(),
            ),
            (HEADER_X_NEXMO_SDK_REVISION, identity.sdk_revision().to_owned()),
        ];

        log::debug!(
            "Signed request for {} with parameters [{}]",
            endpoint,
            params.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
        );

        Self {
            endpoint: endpoint.clone(),
            params,
            headers,
        }
    }

    /// Endpoint without the query string.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    #[must_use]
    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn headers(&self) -> &[(HeaderName, String)] {
        &self.headers
    }

    /// Full request URL with every parameter form-encoded into the query.
    #[must_use]
    pub fn url(&self) -> Url {
        let mut url = self.endpoint.clone();
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request_signing::signing::compute_signature;

    fn token_endpoint() -> Url {
        Url::parse("https://api.nexmo.com/sdk/token/json").unwrap()
    }

    fn caller_params() -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert("device_id".into(), "fq_7le_qTzY:APA91b".into());
        params.insert("source_ip_address".into(), "127.0.0.1".into());
        params
    }

    #[test]
    fn test_signed_request_params() {
        let identity = ClientIdentity::new("aa6215a6", "f3ac8cc9b1ddde5");
        let request = SignedRequest::new_at(&token_endpoint(), &caller_params(), &identity, 1_465_215_221);

        assert_eq!(request.param("app_id"), Some("aa6215a6"));
        assert_eq!(request.param("timestamp"), Some("1465215221"));
        assert_eq!(request.param("device_id"), Some("fq_7le_qTzY:APA91b"));

        let mut unsigned = request.params().clone();
        unsigned.remove("sig");
        assert_eq!(
            request.param("sig"),
            Some(compute_signature(&unsigned, identity.shared_secret()).as_str())
        );
    }

    #[test]
    fn test_signed_request_url_is_form_encoded() {
        let identity = ClientIdentity::new("app", "secret");
        let mut params = ParameterSet::new();
        params.insert("number".into(), "+52 1111".into());
        params.insert("token".into(), "a&b=c".into());

        let request = SignedRequest::new_at(&token_endpoint(), &params, &identity, 42);
        let url = request.url();

        assert_eq!(url.path(), "/sdk/token/json");
        let query = url.query().unwrap();
        assert!(query.starts_with("app_id=app&number=%2B52+1111&sig="));
        assert!(query.ends_with("&timestamp=42&token=a%26b%3Dc"));

        let decoded: ParameterSet = url.query_pairs().into_owned().collect();
        assert_eq!(&decoded, request.params());
    }

    #[test]
    fn test_signed_request_headers() {
        let identity = ClientIdentity::new("app", "secret");
        let request = SignedRequest::new(&token_endpoint(), &ParameterSet::new(), &identity);

        let headers: Vec<(&str, &str)> = request
            .headers()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();
        assert_eq!(
            headers,
            vec![
                ("content-type", "application/x-www-form-urlencoded"),
                ("content-encoding", "UTF-8"),
                ("x-nexmo-sdk-os-family", "ANDROID"),
                ("x-nexmo-sdk-os-revision", "23"),
                ("x-nexmo-sdk-revision", "1.0"),
            ]
        );
    }

    #[test]
    fn test_signed_request_never_carries_secret() {
        let identity = ClientIdentity::new("app", "very-secret");
        let request = SignedRequest::new(&token_endpoint(), &caller_params(), &identity);

        assert!(!request.url().as_str().contains("very-secret"));
        assert!(request.params().values().all(|v| v != "very-secret"));
    }
}
