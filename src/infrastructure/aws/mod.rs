//! AWS clients backed by the `aws` command line tool

pub mod apigateway;
pub mod cli;
pub mod lambda;
pub mod s3;

pub use apigateway::AwsApiGateway;
pub use cli::AwsCli;
pub use lambda::AwsLambda;
pub use s3::AwsS3;
