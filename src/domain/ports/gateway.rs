//! Gateway port - the HTTP API layer fronting functions

use crate::domain::entities::{Integration, RestApi, Stage};
use crate::domain::value_objects::HttpMethod;

use super::RemoteResult;

/// Client for the HTTP gateway
pub trait Gateway {
    /// Region the gateway lives in, used to build invoke URLs
    fn region(&self) -> &str;

    /// Every API with its resource tree
    fn list_apis(&self) -> RemoteResult<Vec<RestApi>>;

    fn get_integration(
        &self,
        api_id: &str,
        resource_id: &str,
        method: HttpMethod,
    ) -> RemoteResult<Integration>;

    /// Fetch a stage; `RemoteError::NotFound` when the stage does not exist yet
    fn get_stage(&self, api_id: &str, stage: &str) -> RemoteResult<Stage>;

    /// Deploy the API to `stage`, creating the stage; returns the deployment id
    fn create_deployment(&self, api_id: &str, stage: &str) -> RemoteResult<String>;

    /// Point the stage's `lambdaAlias` variable at `lambda_alias`
    fn update_stage(&self, api_id: &str, stage: &str, lambda_alias: &str) -> RemoteResult<Stage>;
}
