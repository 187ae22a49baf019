// ============================================================================
// Configuration and CLI
// ============================================================================

use crate::elb::{InvocationConfig, OutputFormat, Policy};

use clap::Parser;
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "elbmod",
    about = "Modify connection draining, cross-zone balancing and idle timeout of a load balancer"
)]
pub struct Config {
    /// Name of the load balancer to modify
    #[arg(value_name = "LOAD_BALANCER")]
    pub load_balancers: Vec<String>,

    /// Enable connection draining
    #[arg(long)]
    pub enable_connection_draining: bool,

    /// Disable connection draining
    #[arg(long)]
    pub disable_connection_draining: bool,

    /// Max time (in seconds) to keep existing conns open before deregistering instances
    #[arg(long, value_name = "SECS", default_value = "300")]
    pub connection_draining_timeout: u32,

    /// Enable cross zone load balancing
    #[arg(long)]
    pub enable_cross_zone_balancing: bool,

    /// Disable cross zone load balancing
    #[arg(long)]
    pub disable_cross_zone_balancing: bool,

    /// Time (in seconds) the connection is allowed to be idle before it is closed
    #[arg(long, value_name = "SECS")]
    pub connection_idle_timeout: Option<u32>,

    /// Comma-separated list of availability zones
    #[arg(short = 'Z', long, env = "ELB_AVAILABILITY_ZONES", value_delimiter = ',')]
    pub availability_zones: Vec<String>,

    /// Region the load balancer lives in
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Load balancing API endpoint [default: regional endpoint of --region]
    #[arg(long, env = "ELB_ENDPOINT")]
    pub endpoint: Option<Url>,

    /// Bearer token sent with the API request
    #[arg(long, env = "ELB_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// API request timeout (seconds)
    #[arg(long, env = "ELB_REQUEST_TIMEOUT", default_value = "30")]
    pub request_timeout: u64,

    /// Refuse to run without at least one availability zone (-Z)
    #[arg(long, env = "ELB_REQUIRE_AVAILABILITY_ZONE")]
    pub require_availability_zone: bool,

    /// Idle timeout (seconds) to send when --connection-idle-timeout is not given
    #[arg(long, env = "ELB_DEFAULT_IDLE_TIMEOUT", value_name = "SECS")]
    pub default_idle_timeout: Option<u32>,

    /// Output format for the API response
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

impl Config {
    /// Snapshot of the attribute options for a single invocation.
    pub fn invocation(&self) -> InvocationConfig {
        InvocationConfig {
            enable_connection_draining: self.enable_connection_draining,
            disable_connection_draining: self.disable_connection_draining,
            connection_draining_timeout: self.connection_draining_timeout,
            enable_cross_zone_balancing: self.enable_cross_zone_balancing,
            disable_cross_zone_balancing: self.disable_cross_zone_balancing,
            connection_idle_timeout: self.connection_idle_timeout,
            availability_zones: self.availability_zones.clone(),
            load_balancers: self.load_balancers.clone(),
        }
    }

    pub fn policy(&self) -> Policy {
        Policy {
            require_availability_zone: self.require_availability_zone,
            default_idle_timeout: self.default_idle_timeout,
        }
    }
}
