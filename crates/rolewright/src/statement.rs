//! Permission statements.
//!
//! Statements use the IAM policy grammar so that policy files written for the
//! provisioning engine can be attached without translation.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Whether a statement grants or denies the listed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Grant the actions.
    Allow,
    /// Deny the actions, overriding any allow.
    Deny,
}

/// A single permission statement.
///
/// `Action` and `Resource` accept either a string or a list of strings, as IAM
/// does. Unknown keys are rejected so that typos in policy files surface as
/// validation errors instead of silently dropped permissions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct PolicyStatement {
    /// Optional statement identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sid: Option<String>,

    /// Allow or deny.
    pub effect: Effect,

    /// Actions covered by this statement (e.g. `logs:PutLogEvents`).
    #[serde(rename = "Action", with = "one_or_many")]
    pub actions: Vec<String>,

    /// Resources the actions apply to.
    #[serde(
        rename = "Resource",
        with = "one_or_many",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub resources: Vec<String>,

    /// Principal block, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub principal: Option<Value>,

    /// Condition block, kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Value>,
}

impl PolicyStatement {
    /// Creates an `Allow` statement.
    pub fn allow<A, R>(actions: A, resources: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            sid: None,
            effect: Effect::Allow,
            actions: actions.into_iter().map(Into::into).collect(),
            resources: resources.into_iter().map(Into::into).collect(),
            principal: None,
            condition: None,
        }
    }

    /// Sets the statement identifier.
    pub fn with_sid(mut self, sid: impl Into<String>) -> Self {
        self.sid = Some(sid.into());
        self
    }

    /// Restricts the statement to a service principal.
    pub fn with_service_principal(mut self, service: &str) -> Self {
        self.principal = Some(json!({ "Service": service }));
        self
    }

    /// Adds a single-key condition, e.g. `ArnLike { aws:SourceArn: <arn> }`.
    pub fn with_condition(mut self, operator: &str, key: &str, value: &str) -> Self {
        self.condition = Some(json!({ operator: { key: value } }));
        self
    }

    /// Returns whether this statement lists the given action.
    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }

    /// A statement naming a `Principal` is a resource-based grant, not an
    /// identity permission.
    pub fn is_resource_grant(&self) -> bool {
        self.principal.is_some()
    }
}

mod one_or_many {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    pub fn serialize<S: Serializer>(values: &[String], serializer: S) -> Result<S::Ok, S::Error> {
        match values {
            [single] => serializer.serialize_str(single),
            _ => values.serialize(serializer),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_action_and_resource() {
        let stmt: PolicyStatement = serde_json::from_str(
            r#"{"Effect": "Allow", "Action": "s3:GetObject", "Resource": "arn:aws:s3:::data/*"}"#,
        )
        .unwrap();

        assert_eq!(stmt.effect, Effect::Allow);
        assert_eq!(stmt.actions, vec!["s3:GetObject"]);
        assert_eq!(stmt.resources, vec!["arn:aws:s3:::data/*"]);
        assert!(stmt.sid.is_none());
    }

    #[test]
    fn test_parse_action_list_preserves_order() {
        let stmt: PolicyStatement = serde_json::from_str(
            r#"{"Sid": "Rw", "Effect": "Deny", "Action": ["s3:PutObject", "s3:GetObject"]}"#,
        )
        .unwrap();

        assert_eq!(stmt.sid.as_deref(), Some("Rw"));
        assert_eq!(stmt.effect, Effect::Deny);
        assert_eq!(stmt.actions, vec!["s3:PutObject", "s3:GetObject"]);
        assert!(stmt.resources.is_empty());
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let result = serde_json::from_str::<PolicyStatement>(
            r#"{"Effect": "Allow", "Actions": ["s3:GetObject"]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_effect_rejected() {
        let result = serde_json::from_str::<PolicyStatement>(
            r#"{"Effect": "Maybe", "Action": "s3:GetObject"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_collapses_single_values() {
        let stmt = PolicyStatement::allow(["lambda:InvokeFunction"], ["*"])
            .with_sid("Invoke")
            .with_service_principal("apigateway.amazonaws.com")
            .with_condition("ArnLike", "aws:SourceArn", "arn:aws:execute-api:x");

        let value = serde_json::to_value(&stmt).unwrap();
        assert_eq!(
            value,
            json!({
                "Sid": "Invoke",
                "Effect": "Allow",
                "Action": "lambda:InvokeFunction",
                "Resource": "*",
                "Principal": { "Service": "apigateway.amazonaws.com" },
                "Condition": { "ArnLike": { "aws:SourceArn": "arn:aws:execute-api:x" } }
            })
        );
    }

    #[test]
    fn test_has_action() {
        let stmt = PolicyStatement::allow(["logs:CreateLogStream", "logs:PutLogEvents"], ["*"]);
        assert!(stmt.has_action("logs:PutLogEvents"));
        assert!(!stmt.has_action("logs:DeleteLogGroup"));
        assert!(!stmt.is_resource_grant());
        assert!(stmt.with_service_principal("lambda.amazonaws.com").is_resource_grant());
    }
}
