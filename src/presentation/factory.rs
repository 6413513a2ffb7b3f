//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::DeployUseCase;
use crate::config::AwsConfig;
use crate::infrastructure::{
    AwsApiGateway, AwsCli, AwsLambda, AwsS3, CommandRunner, SystemRunner, ZipArtifactProducer,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type AwsDeployUseCase<R = SystemRunner> =
    DeployUseCase<AwsLambda<R>, AwsS3<R>, AwsApiGateway<R>, ZipArtifactProducer>;

/// Create the shared `aws` driver for the resolved region and profile
pub fn create_aws_cli(aws: &AwsConfig) -> Arc<AwsCli> {
    Arc::new(AwsCli::new(aws.region.clone(), aws.profile.clone()))
}

/// Create a deploy use case with all dependencies wired up
///
/// The gateway needs a concrete region to build invoke URLs, so an unset
/// region is resolved from the profile here (falling back to `us-east-1`).
pub fn create_deploy_use_case<R: CommandRunner>(cli: Arc<AwsCli<R>>) -> AwsDeployUseCase<R> {
    let region = cli.resolve_region();
    DeployUseCase::new(
        AwsLambda::new(cli.clone()),
        AwsS3::new(cli.clone()),
        AwsApiGateway::new(cli, region),
        ZipArtifactProducer::new(),
    )
}
