pub mod attributes;
pub mod client;
pub mod invocation;
pub mod output;
pub mod resolver;
pub mod service;

pub use client::HttpElbClient;
pub use invocation::{InvocationConfig, Policy};
pub use output::OutputFormat;
pub use service::{ModifyError, ModifyService};
