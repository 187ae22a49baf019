mod config_cli;
mod elb;

use config_cli::Config;
use elb::{HttpElbClient, ModifyError, ModifyService, OutputFormat, output};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::process::ExitCode;

/// What the process prints before exiting.
#[derive(Debug, PartialEq, Eq)]
enum Report {
    Response(String),
    UsageError(String),
}

impl Report {
    fn exit_code(&self) -> u8 {
        match self {
            Report::Response(_) => 0,
            Report::UsageError(_) => 1,
        }
    }
}

/// Usage errors become a single stderr line; remote errors propagate.
fn report(result: Result<Value, ModifyError>, format: OutputFormat) -> Result<Report> {
    match result {
        Ok(response) => {
            let rendered =
                output::render(&response, format).context("Failed to render response")?;
            Ok(Report::Response(rendered))
        }
        Err(ModifyError::Usage(e)) => Ok(Report::UsageError(format!("ERROR: {}", e))),
        Err(e) => Err(e).context("Failed to modify load balancer attributes"),
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();

    let client = HttpElbClient::new(&config)?;
    let service = ModifyService::new(client, config.policy());

    let report = report(service.run(&config.invocation()).await, config.format)?;
    match &report {
        Report::Response(rendered) => println!("{}", rendered),
        Report::UsageError(line) => eprintln!("{}", line),
    }
    Ok(ExitCode::from(report.exit_code()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use elb::client::ClientError;
    use elb::resolver::ValidationError;
    use serde_json::json;

    #[test]
    fn test_usage_error_exits_one_with_error_line() {
        let result = Err(ModifyError::Usage(ValidationError::ConflictingFlags {
            attribute: "connection draining",
        }));

        let report = report(result, OutputFormat::Pretty).unwrap();
        assert_eq!(report.exit_code(), 1);
        assert_eq!(
            report,
            Report::UsageError(
                "ERROR: Cannot both enable and disable connection draining".to_string()
            )
        );
    }

    #[test]
    fn test_missing_target_message() {
        let result = Err(ModifyError::Usage(ValidationError::MissingTargetResource));
        let report = report(result, OutputFormat::Json).unwrap();
        assert_eq!(
            report,
            Report::UsageError("ERROR: Please specify the ELB ID".to_string())
        );
    }

    #[test]
    fn test_success_exits_zero_with_rendered_body() {
        let response = json!({"LoadBalancerName": "lb-1"});
        let report = report(Ok(response), OutputFormat::Json).unwrap();
        assert_eq!(report.exit_code(), 0);
        assert_eq!(
            report,
            Report::Response(r#"{"LoadBalancerName":"lb-1"}"#.to_string())
        );
    }

    #[test]
    fn test_remote_error_returned_as_error() {
        let result = Err(ModifyError::Remote(ClientError::Service {
            status: 403,
            body: "AccessDenied".to_string(),
        }));

        let err = report(result, OutputFormat::Pretty).unwrap_err();
        let chain = format!("{:#}", err);
        assert!(chain.contains("Failed to modify load balancer attributes"));
        assert!(chain.contains("Service returned 403: AccessDenied"));
    }
}
