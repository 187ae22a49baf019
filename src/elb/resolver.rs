use super::attributes::{
    AttributeUpdatePayload, ConnectionDraining, ConnectionSettings, CrossZoneLoadBalancing,
};
use super::invocation::{InvocationConfig, Policy};

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please specify the ELB ID")]
    MissingTargetResource,

    #[error("Cannot both enable and disable {attribute}")]
    ConflictingFlags { attribute: &'static str },

    #[error("You have not provided a valid availability zone value. (-Z parameter)")]
    MissingAvailabilityZone,
}

/// Reject invocations that cannot produce a single well-formed update.
pub fn validate(config: &InvocationConfig, policy: &Policy) -> Result<(), ValidationError> {
    if config.target().is_none() {
        return Err(ValidationError::MissingTargetResource);
    }

    if config.enable_connection_draining && config.disable_connection_draining {
        return Err(ValidationError::ConflictingFlags {
            attribute: "connection draining",
        });
    }

    if config.enable_cross_zone_balancing && config.disable_cross_zone_balancing {
        return Err(ValidationError::ConflictingFlags {
            attribute: "cross zone balancing",
        });
    }

    if policy.require_availability_zone && config.availability_zones.is_empty() {
        return Err(ValidationError::MissingAvailabilityZone);
    }

    Ok(())
}

/// Build the attribute update for an already validated invocation.
///
/// If both flags of a pair are somehow set, disable wins.
pub fn resolve_attributes(config: &InvocationConfig, policy: &Policy) -> AttributeUpdatePayload {
    let connection_draining = effective_state(
        config.enable_connection_draining,
        config.disable_connection_draining,
    )
    .map(|enabled| ConnectionDraining {
        enabled,
        timeout: config.connection_draining_timeout,
    });

    let cross_zone_load_balancing = effective_state(
        config.enable_cross_zone_balancing,
        config.disable_cross_zone_balancing,
    )
    .map(|enabled| CrossZoneLoadBalancing { enabled });

    let connection_settings = config
        .connection_idle_timeout
        .or(policy.default_idle_timeout)
        .map(|idle_timeout| ConnectionSettings { idle_timeout });

    let payload = AttributeUpdatePayload {
        connection_draining,
        cross_zone_load_balancing,
        connection_settings,
    };

    info!("Resolved attributes: {:?}", payload);
    payload
}

fn effective_state(enable: bool, disable: bool) -> Option<bool> {
    if disable {
        Some(false)
    } else if enable {
        Some(true)
    } else {
        None
    }
}
