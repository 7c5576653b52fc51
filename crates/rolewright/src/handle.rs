//! Built role descriptions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::roles::RoleType;
use crate::statement::PolicyStatement;

/// Key-unique descriptive tags.
///
/// Re-tagging a key overwrites its value; iteration is ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet {
    tags: BTreeMap<String, String>,
}

impl TagSet {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a tag, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.tags.insert(key.into(), value.into())
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    /// Returns whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterates over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TagSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = TagSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// A fully built role, ready to hand to provisioning collaborators.
///
/// Handles compare by value: two builds from the same configuration and the
/// same policy files are equal. A handle is serializable for output but can
/// only be produced by a build.
///
/// The statement list can mix identity permissions with resource-based grants
/// (statements naming a `Principal`, such as the API Gateway invoke grants of
/// an authorizer role). Use [`RoleHandle::identity_statements`] and
/// [`RoleHandle::resource_grants`] to split them when provisioning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleHandle {
    name: String,
    role_type: RoleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    trusted_service: Option<String>,
    statements: Vec<PolicyStatement>,
    tags: TagSet,
}

impl RoleHandle {
    /// Creates an empty handle with no statements and no tags.
    pub(crate) fn new(name: String, role_type: RoleType) -> Self {
        Self {
            name,
            role_type,
            trusted_service: role_type.trusted_service().map(str::to_string),
            statements: Vec::new(),
            tags: TagSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role_type(&self) -> RoleType {
        self.role_type
    }

    /// Service principal allowed to assume the role, if any.
    pub fn trusted_service(&self) -> Option<&str> {
        self.trusted_service.as_deref()
    }

    /// Attached statements in attachment order.
    pub fn statements(&self) -> &[PolicyStatement] {
        &self.statements
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Statements granting permissions to the role itself.
    pub fn identity_statements(&self) -> impl Iterator<Item = &PolicyStatement> {
        self.statements.iter().filter(|s| !s.is_resource_grant())
    }

    /// Statements that belong on another resource's policy.
    pub fn resource_grants(&self) -> impl Iterator<Item = &PolicyStatement> {
        self.statements.iter().filter(|s| s.is_resource_grant())
    }

    /// Returns the statement with the given id, if attached.
    pub fn statement(&self, sid: &str) -> Option<&PolicyStatement> {
        self.statements.iter().find(|s| s.sid.as_deref() == Some(sid))
    }

    pub(crate) fn attach(&mut self, statement: PolicyStatement) {
        self.statements.push(statement);
    }

    pub(crate) fn tag(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.tags.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_set_last_write_wins() {
        let mut tags = TagSet::new();
        assert_eq!(tags.insert("Project", "first"), None);
        assert_eq!(tags.insert("Project", "second"), Some("first".to_string()));

        assert_eq!(tags.len(), 1);
        assert_eq!(tags.get("Project"), Some("second"));
    }

    #[test]
    fn test_tag_set_iterates_in_key_order() {
        let tags: TagSet = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();
        let keys: Vec<&str> = tags.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_new_handle_is_empty() {
        let handle = RoleHandle::new("Role-rds".into(), RoleType::Rds);
        assert_eq!(handle.name(), "Role-rds");
        assert_eq!(handle.trusted_service(), Some("monitoring.rds.amazonaws.com"));
        assert!(handle.statements().is_empty());
        assert!(handle.tags().is_empty());
    }

    #[test]
    fn test_handle_json_shape() {
        let mut handle = RoleHandle::new("Role-composite".into(), RoleType::Composite);
        handle.attach(PolicyStatement::allow(["s3:GetObject"], ["*"]).with_sid("Read"));
        handle.tag("Environment", "Development");

        let value = serde_json::to_value(&handle).unwrap();
        assert_eq!(value["name"], "Role-composite");
        assert_eq!(value["role_type"], "composite");
        assert!(value.get("trusted_service").is_none());
        assert_eq!(value["statements"][0]["Sid"], "Read");
        assert_eq!(value["tags"]["Environment"], "Development");
    }

    #[test]
    fn test_statements_split_by_principal() {
        let mut handle = RoleHandle::new("Role-authorizer".into(), RoleType::Authorizer);
        handle.attach(PolicyStatement::allow(["logs:PutLogEvents"], ["*"]).with_sid("Logs"));
        handle.attach(
            PolicyStatement::allow(["lambda:InvokeFunction"], ["*"])
                .with_sid("Invoke")
                .with_service_principal("apigateway.amazonaws.com"),
        );

        let identity: Vec<_> = handle.identity_statements().filter_map(|s| s.sid.as_deref()).collect();
        let grants: Vec<_> = handle.resource_grants().filter_map(|s| s.sid.as_deref()).collect();
        assert_eq!(identity, vec!["Logs"]);
        assert_eq!(grants, vec!["Invoke"]);
        assert_eq!(handle.statements().len(), 2);
    }
}
