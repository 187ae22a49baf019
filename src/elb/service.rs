use super::attributes::AttributeUpdatePayload;
use super::client::{ClientError, LoadBalancerClient};
use super::invocation::{InvocationConfig, Policy};
use super::resolver::{ValidationError, resolve_attributes, validate};

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum ModifyError {
    #[error(transparent)]
    Usage(#[from] ValidationError),

    #[error(transparent)]
    Remote(#[from] ClientError),
}

/// Validates, resolves and applies one attribute update.
pub struct ModifyService<C> {
    client: C,
    policy: Policy,
}

impl<C: LoadBalancerClient> ModifyService<C> {
    pub fn new(client: C, policy: Policy) -> Self {
        Self { client, policy }
    }

    pub async fn run(&self, config: &InvocationConfig) -> Result<Value, ModifyError> {
        validate(config, &self.policy)?;
        let target = config
            .target()
            .ok_or(ValidationError::MissingTargetResource)?;

        let payload = resolve_attributes(config, &self.policy);
        if payload.is_empty() {
            warn!("No attributes selected, {} will be left unchanged", target);
        }

        Ok(self.execute(target, &payload).await?)
    }

    /// Single remote call; errors come back exactly as the client reported them.
    pub async fn execute(
        &self,
        load_balancer: &str,
        payload: &AttributeUpdatePayload,
    ) -> Result<Value, ClientError> {
        let response = self
            .client
            .modify_load_balancer_attributes(load_balancer, payload)
            .await?;
        info!("Updated attributes of {}", load_balancer);
        Ok(response)
    }
}
