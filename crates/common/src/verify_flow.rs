//! Token acquisition and token-scoped verify search.
//!
//! A search is two sequential round trips: the token endpoint issues a
//! short-lived token, which is then signed into the search request. Each
//! response is verified against the shared secret before it is decoded.

use error_stack::{Report, ResultExt};
use serde::de::DeserializeOwned;
use url::Url;

use crate::constants::{
    DEFAULT_SEARCH_URL, DEFAULT_TOKEN_URL, PARAM_DEVICE_ID, PARAM_SOURCE_IP_ADDRESS, PARAM_TOKEN,
};
use crate::error::VerifyError;
use crate::models::{SearchResponse, TokenResponse};
use crate::request_signing::{
    ClientIdentity, ParameterSet, SharedSecret, SignedRequest, VerifiedResponse,
};
use crate::transport::{Transport, UreqTransport};

/// Endpoint URLs used by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub token_url: Url,
    pub search_url: Url,
}

impl Endpoints {
    /// # Errors
    ///
    /// Returns [`VerifyError::Configuration`] if either URL does not parse.
    pub fn new(token_url: &str, search_url: &str) -> Result<Self, Report<VerifyError>> {
        Ok(Self {
            token_url: parse_endpoint(token_url)?,
            search_url: parse_endpoint(search_url)?,
        })
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            token_url: Url::parse(DEFAULT_TOKEN_URL).expect("default token URL should parse"),
            search_url: Url::parse(DEFAULT_SEARCH_URL).expect("default search URL should parse"),
        }
    }
}

fn parse_endpoint(url: &str) -> Result<Url, Report<VerifyError>> {
    Url::parse(url).change_context(VerifyError::Configuration {
        message: format!("Invalid endpoint URL: {url}"),
    })
}

/// States of the token-then-search flow.
#[derive(Debug, PartialEq, Eq)]
enum SearchFlow {
    TokenRequested,
    SearchRequested { token: String },
}

impl SearchFlow {
    /// Transition guard out of `TokenRequested`: only an issued token moves
    /// the flow on to the search call.
    fn after_token(response: TokenResponse) -> Result<Self, Report<VerifyError>> {
        if !response.status.is_success() {
            log::warn!(
                "Token request rejected with result_code {}: {}",
                response.status.result_code,
                response.status.result_message
            );
            return Err(Report::new(VerifyError::RemoteRejection {
                result_code: response.status.result_code,
                message: response.status.result_message,
            }));
        }

        Ok(SearchFlow::SearchRequested {
            token: response.token,
        })
    }
}

/// Client for the Verify SDK endpoints.
///
/// Holds only immutable state; concurrent calls on one client are
/// independent as long as the transport allows it.
#[derive(Debug, Clone)]
pub struct VerifyClient<T> {
    identity: ClientIdentity,
    endpoints: Endpoints,
    transport: T,
}

impl VerifyClient<UreqTransport> {
    /// Creates a client for the production endpoints.
    pub fn new(app_id: impl Into<String>, shared_secret: impl Into<String>) -> Self {
        Self::with_transport(
            ClientIdentity::new(app_id, SharedSecret::new(shared_secret)),
            Endpoints::default(),
            UreqTransport::new(),
        )
    }
}

impl<T: Transport> VerifyClient<T> {
    pub fn with_transport(identity: ClientIdentity, endpoints: Endpoints, transport: T) -> Self {
        Self {
            identity,
            endpoints,
            transport,
        }
    }

    #[must_use]
    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Requests a token for `params` (`device_id` and `source_ip_address`).
    ///
    /// A non-zero `result_code` is returned as data.
    ///
    /// # Errors
    ///
    /// Returns a transport, signature or decode error.
    pub fn get_token(&self, params: &ParameterSet) -> Result<TokenResponse, Report<VerifyError>> {
        self.call(&self.endpoints.token_url, params)
    }

    /// Obtains a token and runs a verify search with it.
    ///
    /// `params` should carry `device_id`, `source_ip_address`, `number` and
    /// optionally `country`; the remote service validates them. The search
    /// response is returned regardless of its `result_code`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError::RemoteRejection`] if no token was issued, or a
    /// transport, signature or decode error from either call.
    pub fn verify_search(
        &self,
        params: &ParameterSet,
    ) -> Result<SearchResponse, Report<VerifyError>> {
        let mut state = SearchFlow::TokenRequested;
        loop {
            state = match state {
                SearchFlow::TokenRequested => {
                    let token_response = self
                        .get_token(&token_parameters(params))
                        .attach("while requesting a search token")?;
                    SearchFlow::after_token(token_response)?
                }
                SearchFlow::SearchRequested { token } => {
                    log::info!("Token issued, running verify search");
                    let mut search_params = params.clone();
                    search_params.insert(PARAM_TOKEN.to_owned(), token);
                    return self
                        .call(&self.endpoints.search_url, &search_params)
                        .attach("while running verify search");
                }
            };
        }
    }

    fn call<R: DeserializeOwned>(
        &self,
        endpoint: &Url,
        params: &ParameterSet,
    ) -> Result<R, Report<VerifyError>> {
        let request = SignedRequest::new(endpoint, params, &self.identity);
        let raw = self
            .transport
            .get(&request)
            .attach(format!("GET {endpoint}"))?;

        let verified = VerifiedResponse::verify(
            raw.body,
            raw.signature.as_deref(),
            self.identity.shared_secret(),
        )
        .inspect_err(|_| log::warn!("Rejected response from {endpoint}: bad signature"))
        .attach(format!("GET {endpoint} returned status {}", raw.status))?;

        verified.decode()
    }
}

/// The token call only receives the device and source address. Missing keys
/// are sent empty and left for the remote service to reject.
fn token_parameters(params: &ParameterSet) -> ParameterSet {
    [PARAM_DEVICE_ID, PARAM_SOURCE_IP_ADDRESS]
        .into_iter()
        .map(|key| {
            (
                key.to_owned(),
                params.get(key).cloned().unwrap_or_default(),
            )
        })
        .collect()
}
