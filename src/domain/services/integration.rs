//! Integration inspection and invoke URL construction

/// Literal token an integration URI must contain to route by alias
pub const ALIAS_PLACEHOLDER: &str = "${stageVariables.lambdaAlias}";

/// Whether the integration selects the function alias through the stage variable
pub fn routes_through_alias(uri: &str) -> bool {
    uri.contains(ALIAS_PLACEHOLDER)
}

/// `https://<api>.execute-api.<region>.amazonaws.com/<stage><resource_path>`
pub fn invoke_url(api_id: &str, region: &str, stage: &str, resource_path: &str) -> String {
    format!(
        "https://{}.execute-api.{}.amazonaws.com/{}{}",
        api_id, region, stage, resource_path
    )
}
