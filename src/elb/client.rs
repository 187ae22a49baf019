use super::attributes::AttributeUpdatePayload;
use crate::config_cli::Config;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::debug;
use url::Url;

const AMZ_JSON: &str = "application/x-amz-json-1.1";
const MODIFY_ATTRIBUTES_TARGET: &str = "ElasticLoadBalancing.ModifyLoadBalancerAttributes";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Service { status: u16, body: String },

    #[error("Unparseable response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Remote side of the modify operation.
pub trait LoadBalancerClient {
    fn modify_load_balancer_attributes(
        &self,
        load_balancer: &str,
        attributes: &AttributeUpdatePayload,
    ) -> impl Future<Output = Result<Value, ClientError>> + Send;
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct ModifyRequest<'a> {
    load_balancer_name: &'a str,
    load_balancer_attributes: &'a AttributeUpdatePayload,
}

pub struct HttpElbClient {
    client: reqwest::Client,
    endpoint: Url,
    region: String,
    access_token: Option<String>,
}

impl HttpElbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .context("Failed to create HTTP client")?;

        let endpoint = match &config.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => regional_endpoint(&config.region)?,
        };

        Ok(Self {
            client,
            endpoint,
            region: config.region.clone(),
            access_token: config.access_token.clone(),
        })
    }
}

fn regional_endpoint(region: &str) -> Result<Url> {
    Url::parse(&format!("https://elasticloadbalancing.{}.amazonaws.com", region))
        .with_context(|| format!("Invalid region: {}", region))
}

impl LoadBalancerClient for HttpElbClient {
    async fn modify_load_balancer_attributes(
        &self,
        load_balancer: &str,
        attributes: &AttributeUpdatePayload,
    ) -> Result<Value, ClientError> {
        let body = ModifyRequest {
            load_balancer_name: load_balancer,
            load_balancer_attributes: attributes,
        };

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("X-Amz-Target", MODIFY_ATTRIBUTES_TARGET)
            .header("X-Elb-Region", self.region.as_str())
            .json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        debug!("POST {} for {}", self.endpoint, load_balancer);
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        Ok(serde_json::from_str(&text)?)
    }
}
