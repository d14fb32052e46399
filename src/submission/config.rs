use crate::utils::ContractorError;
use reqwest::Url;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://localhost:60001/Contractor/Save";

/// Where and how the form is submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitConfig {
    pub endpoint: Url,
    /// No timeout unless one is configured.
    pub timeout: Option<Duration>,
    /// The default endpoint is a local development server with a
    /// self-signed certificate.
    pub accept_invalid_certs: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        SubmitConfig {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: None,
            accept_invalid_certs: false,
        }
    }
}

impl SubmitConfig {
    /// Defaults overridden by:
    /// - `CONTRACTOR_ENDPOINT`
    /// - `CONTRACTOR_TIMEOUT_SECS`
    /// - `CONTRACTOR_ACCEPT_INVALID_CERTS` (`1`/`true`/`yes`)
    pub fn from_env() -> Result<Self, ContractorError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ContractorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = SubmitConfig::default();

        if let Some(endpoint) = lookup("CONTRACTOR_ENDPOINT") {
            config.endpoint = parse_endpoint(&endpoint)?;
        }

        if let Some(secs) = lookup("CONTRACTOR_TIMEOUT_SECS") {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                ContractorError::Config(format!("CONTRACTOR_TIMEOUT_SECS={:?}: {}", secs, e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(flag) = lookup("CONTRACTOR_ACCEPT_INVALID_CERTS") {
            config.accept_invalid_certs =
                matches!(flag.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        Ok(config)
    }
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url, ContractorError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ContractorError::Config(format!("invalid endpoint {:?}: {}", endpoint, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ContractorError::Config(format!(
            "endpoint scheme must be http or https, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SubmitConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, None);
        assert!(!config.accept_invalid_certs);
    }

    #[test]
    fn test_overrides() {
        let config = SubmitConfig::from_lookup(lookup(&[
            ("CONTRACTOR_ENDPOINT", "http://127.0.0.1:8080/save"),
            ("CONTRACTOR_TIMEOUT_SECS", "15"),
            ("CONTRACTOR_ACCEPT_INVALID_CERTS", "true"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/save");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        assert!(config.accept_invalid_certs);
    }

    #[test]
    fn test_invalid_values() {
        let err = SubmitConfig::from_lookup(lookup(&[("CONTRACTOR_ENDPOINT", "not a url")]));
        assert!(matches!(err, Err(ContractorError::Config(_))));

        let err = SubmitConfig::from_lookup(lookup(&[("CONTRACTOR_ENDPOINT", "ftp://host/save")]));
        assert!(matches!(err, Err(ContractorError::Config(_))));

        let err = SubmitConfig::from_lookup(lookup(&[("CONTRACTOR_TIMEOUT_SECS", "soon")]));
        assert!(matches!(err, Err(ContractorError::Config(_))));
    }
}
