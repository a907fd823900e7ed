use http::header::HeaderName;

// Identity the API expects from its reference Android SDK. These are
// protocol-compatibility fields, not secrets.
pub const SDK_OS_FAMILY: &str = "ANDROID";
pub const SDK_OS_REVISION: &str = "23";
pub const SDK_REVISION: &str = "1.0";

pub const HEADER_X_NEXMO_SDK_OS_FAMILY: HeaderName =
    HeaderName::from_static("x-nexmo-sdk-os-family");
pub const HEADER_X_NEXMO_SDK_OS_REVISION: HeaderName =
    HeaderName::from_static("x-nexmo-sdk-os-revision");
pub const HEADER_X_NEXMO_SDK_REVISION: HeaderName = HeaderName::from_static("x-nexmo-sdk-revision");
pub const HEADER_X_NEXMO_RESPONSE_SIGNATURE: HeaderName =
    HeaderName::from_static("x-nexmo-response-signature");

pub const CONTENT_TYPE_FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
pub const CONTENT_ENCODING_UTF8: &str = "UTF-8";

pub const DEFAULT_TOKEN_URL: &str = "https://api.nexmo.com/sdk/token/json";
pub const DEFAULT_SEARCH_URL: &str = "https://api.nexmo.com/sdk/verify/search/json";

pub const PARAM_APP_ID: &str = "app_id";
pub const PARAM_TIMESTAMP: &str = "timestamp";
pub const PARAM_SIG: &str = "sig";
pub const PARAM_TOKEN: &str = "token";
pub const PARAM_DEVICE_ID: &str = "device_id";
pub const PARAM_SOURCE_IP_ADDRESS: &str = "source_ip_address";
pub const PARAM_NUMBER: &str = "number";
pub const PARAM_COUNTRY: &str = "country";
