//! Remote API Gateway state

use std::collections::BTreeMap;

/// A REST API with its flattened resource tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestApi {
    pub id: String,
    pub name: String,
    pub resources: Vec<ApiResource>,
}

impl RestApi {
    pub fn resource(&self, resource_id: &str) -> Option<&ApiResource> {
        self.resources.iter().find(|r| r.id == resource_id)
    }
}

/// A node of the resource tree (`/`, `/users`, `/users/{id}`...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResource {
    pub id: String,
    pub path: String,
    pub parent_id: Option<String>,
}

impl ApiResource {
    pub fn new(id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            parent_id: None,
        }
    }
}

/// Backend binding of one method on a resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integration {
    pub uri: String,
    pub integration_type: Option<String>,
}

/// A deployed stage and its variables
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stage {
    pub name: String,
    pub deployment_id: Option<String>,
    pub variables: BTreeMap<String, String>,
}

impl Stage {
    /// Stage variable the integration URI uses to select the function alias
    pub const ALIAS_VARIABLE: &'static str = "lambdaAlias";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    /// Current `lambdaAlias` value, `None` when unset or empty
    pub fn lambda_alias(&self) -> Option<&str> {
        self.variables
            .get(Self::ALIAS_VARIABLE)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Exact, case-sensitive comparison against the deployed alias
    pub fn routes_to(&self, alias: &str) -> bool {
        self.lambda_alias() == Some(alias)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_routes_only_on_exact_match() {
        let stage = Stage::new("prod").with_variable("lambdaAlias", "prod");
        assert!(stage.routes_to("prod"));
        assert!(!stage.routes_to("Prod"));
    }

    #[test]
    fn misspelled_variable_counts_as_unset() {
        let stage = Stage::new("prod").with_variable("lamdaAlias", "prod");
        assert_eq!(stage.lambda_alias(), None);
        assert!(!stage.routes_to("prod"));
    }

    #[test]
    fn empty_variable_counts_as_unset() {
        let stage = Stage::new("prod").with_variable("lambdaAlias", "");
        assert_eq!(stage.lambda_alias(), None);
    }

    #[test]
    fn api_resource_lookup_by_id() {
        let api = RestApi {
            id: "api1".into(),
            name: "shop".into(),
            resources: vec![ApiResource::new("root", "/"), ApiResource::new("res1", "/orders")],
        };
        assert_eq!(api.resource("res1").map(|r| r.path.as_str()), Some("/orders"));
        assert!(api.resource("missing").is_none());
    }
}
