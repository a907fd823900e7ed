//! Token and verify search commands.

use verify_sdk_common::constants::{
    PARAM_COUNTRY, PARAM_DEVICE_ID, PARAM_NUMBER, PARAM_SOURCE_IP_ADDRESS,
};
use verify_sdk_common::transport::Transport;
use verify_sdk_common::{ParameterSet, VerifyClient};

use crate::error::CliError;

pub(crate) fn token_params(device_id: &str, source_ip: &str) -> ParameterSet {
    let mut params = ParameterSet::new();
    params.insert(PARAM_DEVICE_ID.to_string(), device_id.to_string());
    params.insert(PARAM_SOURCE_IP_ADDRESS.to_string(), source_ip.to_string());
    params
}

pub(crate) fn search_params(
    device_id: &str,
    source_ip: &str,
    number: &str,
    country: Option<&str>,
) -> ParameterSet {
    let mut params = token_params(device_id, source_ip);
    params.insert(PARAM_NUMBER.to_string(), number.to_string());
    if let Some(country) = country {
        params.insert(PARAM_COUNTRY.to_string(), country.to_string());
    }
    params
}

/// Request a token and render the response as pretty JSON.
pub fn token<T: Transport>(
    client: &VerifyClient<T>,
    params: &ParameterSet,
) -> Result<String, CliError> {
    let response = client.get_token(params)?;
    if !response.status.is_success() {
        log::warn!(
            "Token not issued: {} ({})",
            response.status.result_message,
            response.status.result_code
        );
    }
    Ok(serde_json::to_string_pretty(&response)?)
}

/// Run the token-then-search flow and render the search response as pretty JSON.
pub fn search<T: Transport>(
    client: &VerifyClient<T>,
    params: &ParameterSet,
) -> Result<String, CliError> {
    let response = client.verify_search(params)?;
    log::info!(
        "Search returned result_code {} with user_status {:?}",
        response.status.result_code,
        response.user_status
    );
    Ok(serde_json::to_string_pretty(&response)?)
}
