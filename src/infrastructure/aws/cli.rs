//! AWS CLI driver
//!
//! Every remote call goes through the `aws` binary with `--output json`.
//! Errors are classified from stderr: AWS reports missing resources with a
//! `*NotFoundException` error code, everything else is a plain failure.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::ports::{RemoteError, RemoteResult};
use crate::infrastructure::process::{CommandRunner, SystemRunner};

const AWS: &str = "aws";
const DEFAULT_REGION: &str = "us-east-1";

/// `aws` invocation settings shared by the service clients
pub struct AwsCli<R: CommandRunner = SystemRunner> {
    runner: R,
    region: Option<String>,
    profile: Option<String>,
}

impl AwsCli<SystemRunner> {
    pub fn new(region: Option<String>, profile: Option<String>) -> Self {
        Self::with_runner(SystemRunner, region, profile)
    }
}

impl<R: CommandRunner> AwsCli<R> {
    pub fn with_runner(runner: R, region: Option<String>, profile: Option<String>) -> Self {
        Self {
            runner,
            region,
            profile,
        }
    }

    /// Verify the `aws` binary can be executed, returning its version banner
    pub fn detect(&self) -> RemoteResult<String> {
        let output = self
            .runner
            .run(AWS, &["--version".to_string()])
            .map_err(|e| RemoteError::failed("aws --version", e.to_string()))?;
        if !output.success {
            return Err(RemoteError::failed("aws --version", output.stderr.trim()));
        }
        // Older releases print the banner on stderr.
        let banner = if output.stdout.trim().is_empty() {
            output.stderr
        } else {
            output.stdout
        };
        Ok(banner.trim().to_string())
    }

    /// Confirm the resolved credentials are accepted, returning the caller's ARN
    pub fn verify_credentials(&self) -> RemoteResult<String> {
        let identity: CallerIdentity =
            self.run_json("get-caller-identity", &["sts", "get-caller-identity"])?;
        Ok(identity.arn)
    }

    /// Explicit region, else the profile's configured region, else `us-east-1`
    pub fn resolve_region(&self) -> String {
        if let Some(region) = &self.region {
            return region.clone();
        }
        self.run("configure get", &["configure", "get", "region"])
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_REGION.to_string())
    }

    /// Run an `aws` subcommand and return its stdout
    pub fn run(&self, operation: &str, args: &[&str]) -> RemoteResult<String> {
        let argv = self.argv(args);
        let output = self
            .runner
            .run(AWS, &argv)
            .map_err(|e| RemoteError::failed(operation, e.to_string()))?;
        if output.success {
            Ok(output.stdout)
        } else {
            Err(classify(operation, &output.stderr))
        }
    }

    /// Run an `aws` subcommand and decode its JSON output
    pub fn run_json<T: DeserializeOwned>(&self, operation: &str, args: &[&str]) -> RemoteResult<T> {
        let stdout = self.run(operation, args)?;
        serde_json::from_str(&stdout).map_err(|e| {
            RemoteError::failed(operation, format!("unexpected response: {}", e))
        })
    }

    fn argv(&self, args: &[&str]) -> Vec<String> {
        let mut argv: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        argv.extend(["--output".to_string(), "json".to_string()]);
        if let Some(region) = &self.region {
            argv.extend(["--region".to_string(), region.clone()]);
        }
        if let Some(profile) = &self.profile {
            argv.extend(["--profile".to_string(), profile.clone()]);
        }
        argv
    }
}

#[derive(Deserialize)]
struct CallerIdentity {
    #[serde(rename = "Arn")]
    arn: String,
}

/// Map CLI stderr to a remote error
fn classify(operation: &str, stderr: &str) -> RemoteError {
    let message = stderr
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("command failed")
        .to_string();
    if stderr.contains("NotFoundException") {
        RemoteError::not_found(message)
    } else {
        RemoteError::failed(operation, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scripted::ScriptedRunner;

    #[test]
    fn appends_output_region_and_profile() {
        let runner = ScriptedRunner::new().ok("{}");
        let calls = runner.calls();
        let cli = AwsCli::with_runner(runner, Some("eu-west-1".into()), Some("ci".into()));

        cli.run("get-function", &["lambda", "get-function", "--function-name", "svc"])
            .unwrap();

        assert_eq!(
            calls.lock().unwrap()[0],
            vec![
                "lambda",
                "get-function",
                "--function-name",
                "svc",
                "--output",
                "json",
                "--region",
                "eu-west-1",
                "--profile",
                "ci"
            ]
        );
    }

    #[test]
    fn not_found_exceptions_are_typed() {
        let runner = ScriptedRunner::new().fail(
            "\nAn error occurred (ResourceNotFoundException) when calling the GetFunction operation: Function not found: svc\n",
        );
        let cli = AwsCli::with_runner(runner, None, None);

        let err = cli.run("get-function", &["lambda", "get-function"]).unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("Function not found: svc"));
    }

    #[test]
    fn gateway_not_found_is_typed() {
        let runner = ScriptedRunner::new().fail(
            "An error occurred (NotFoundException) when calling the GetStage operation: Invalid Stage identifier specified",
        );
        let cli = AwsCli::with_runner(runner, None, None);

        assert!(cli.run("get-stage", &["apigateway", "get-stage"]).unwrap_err().is_not_found());
    }

    #[test]
    fn other_failures_keep_operation() {
        let runner = ScriptedRunner::new().fail(
            "An error occurred (AccessDeniedException) when calling the PublishVersion operation",
        );
        let cli = AwsCli::with_runner(runner, None, None);

        let err = cli.run("publish-version", &["lambda", "publish-version"]).unwrap_err();

        assert!(matches!(err, RemoteError::Failed { ref operation, .. } if operation == "publish-version"));
    }

    #[test]
    fn malformed_json_is_a_failure() {
        let runner = ScriptedRunner::new().ok("not json");
        let cli = AwsCli::with_runner(runner, None, None);

        let result: RemoteResult<serde_json::Value> = cli.run_json("get-rest-apis", &["apigateway"]);

        assert!(matches!(result, Err(RemoteError::Failed { .. })));
    }

    #[test]
    fn detect_reports_missing_binary() {
        let runner = ScriptedRunner::new().spawn_error();
        let cli = AwsCli::with_runner(runner, None, None);

        assert!(cli.detect().is_err());
    }

    #[test]
    fn detect_returns_banner() {
        let runner = ScriptedRunner::new().ok("aws-cli/2.15.0 Python/3.11.6 Linux/6.5\n");
        let cli = AwsCli::with_runner(runner, None, None);

        assert_eq!(cli.detect().unwrap(), "aws-cli/2.15.0 Python/3.11.6 Linux/6.5");
    }

    #[test]
    fn credentials_are_checked_with_sts() {
        let runner = ScriptedRunner::new().ok(
            r#"{"UserId": "AIDA123", "Account": "123456789012", "Arn": "arn:aws:iam::123456789012:user/ci"}"#,
        );
        let calls = runner.calls();
        let cli = AwsCli::with_runner(runner, None, Some("ci".into()));

        assert_eq!(
            cli.verify_credentials().unwrap(),
            "arn:aws:iam::123456789012:user/ci"
        );
        assert_eq!(calls.lock().unwrap()[0][..2], ["sts", "get-caller-identity"]);
    }

    #[test]
    fn expired_credentials_are_a_failure_not_a_missing_resource() {
        let runner = ScriptedRunner::new().fail(
            "An error occurred (ExpiredToken) when calling the GetCallerIdentity operation: The security token included in the request is expired",
        );
        let cli = AwsCli::with_runner(runner, None, None);

        let err = cli.verify_credentials().unwrap_err();

        assert!(!err.is_not_found());
        assert!(err.to_string().contains("ExpiredToken"));
    }

    #[test]
    fn region_falls_back_to_profile_then_default() {
        let cli = AwsCli::with_runner(ScriptedRunner::new().ok("ap-south-1\n"), None, None);
        assert_eq!(cli.resolve_region(), "ap-south-1");

        let cli = AwsCli::with_runner(ScriptedRunner::new().fail(""), None, None);
        assert_eq!(cli.resolve_region(), "us-east-1");

        let cli = AwsCli::with_runner(ScriptedRunner::new(), Some("eu-west-1".into()), None);
        assert_eq!(cli.resolve_region(), "eu-west-1");
    }
}
