use crate::models::ContractorPayload;
use crate::submission::config::SubmitConfig;
use crate::utils::ContractorError;
use reqwest::Url;

/// Successful save: the endpoint answered with a 2xx status.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub status: u16,
    pub body: String,
}

/// Posts contractor payloads to the save endpoint. One request per call,
/// no retries.
#[derive(Debug, Clone)]
pub struct ContractorClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ContractorClient {
    pub fn new(config: SubmitConfig) -> Result<Self, ContractorError> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder.build().map_err(client_init_error)?;

        Ok(ContractorClient {
            http,
            endpoint: config.endpoint,
        })
    }

    pub async fn submit(&self, payload: &ContractorPayload) -> Result<SubmitReceipt, ContractorError> {
        let endpoint = self.endpoint.to_string();
        log::info!(
            "Submitting {} contractor {} {} to {}",
            payload.contractor_type,
            payload.first_name,
            payload.last_name,
            endpoint
        );

        let resp = self
            .http
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                log::error!("No save endpoint reachable at {}: {}", endpoint, e);
                ContractorError::Transport {
                    endpoint: endpoint.clone(),
                    source: e,
                }
            })?;

        let status = resp.status().as_u16();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("Could not read response body from {}: {}", endpoint, e);
                String::new()
            }
        };

        if !(200..300).contains(&status) {
            log::error!("{} rejected the submission with status {}", endpoint, status);
            return Err(ContractorError::Rejected {
                endpoint,
                status,
                body,
            });
        }

        log::info!("Contractor saved ({})", status);
        Ok(SubmitReceipt { status, body })
    }
}

fn client_init_error(e: reqwest::Error) -> ContractorError {
    ContractorError::Config(format!("cannot build HTTP client: {}", e))
}
