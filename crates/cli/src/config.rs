//! Settings loading for the CLI.
//!
//! Configuration comes from a TOML file, or the embedded defaults when no file
//! is given, merged with environment variables prefixed with `VERIFY_SDK__`.
//! For example `VERIFY_SDK__CREDENTIALS__SHARED_SECRET` overrides
//! `credentials.shared_secret`.

use std::fs;
use std::path::Path;

use verify_sdk_common::settings::Settings;

use crate::error::CliError;

pub(crate) fn load_settings(file: Option<&Path>, verbose: bool) -> Result<Settings, CliError> {
    let settings = match file {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            if verbose {
                println!("Loading config from: {}", path.display());
            }
            Settings::from_toml(&content)?
        }
        None => {
            if verbose {
                println!("Loading embedded default config");
            }
            Settings::new()?
        }
    };

    if verbose {
        println!("Environment variables with VERIFY_SDK__ prefix were merged");
        println!("Token endpoint: {}", settings.endpoints.token_url);
        println!("Search endpoint: {}", settings.endpoints.search_url);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_config(dir: &TempDir) -> PathBuf {
        let config_path = dir.path().join("verify-sdk.toml");
        let mut file = fs::File::create(&config_path).unwrap();
        write!(
            file,
            r#"
[credentials]
app_id = "aa6215a6-2c00-4625-85e9-6426bb377027"
shared_secret = "f3ac8cc9b1ddde5"

[endpoints]
token_url = "https://verify.test/sdk/token/json"
search_url = "https://verify.test/sdk/verify/search/json"
"#
        )
        .unwrap();
        config_path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = create_test_config(&dir);

        let settings = load_settings(Some(&config_path), false).unwrap();
        assert_eq!(
            settings.endpoints.search_url,
            "https://verify.test/sdk/verify/search/json"
        );
        assert!(settings.to_client().is_ok());
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("invalid.toml");
        fs::write(&config_path, "invalid { toml").unwrap();

        let result = load_settings(Some(&config_path), false);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let result = load_settings(Some(&config_path), false);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_load_verbose() {
        let dir = TempDir::new().unwrap();
        let config_path = create_test_config(&dir);

        assert!(load_settings(Some(&config_path), true).is_ok());
    }
}
