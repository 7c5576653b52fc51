//! Role type definitions.
//!
//! The role type selects which baseline permissions a role receives and which
//! service is trusted to assume it:
//! - Lambda: function execution role
//! - Rds: database monitoring role
//! - Authorizer: API Gateway custom authorizer
//! - Composite: everything comes from policy files

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleError;

/// Closed set of role types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RoleType {
    /// Execution role for a serverless function.
    ///
    /// **Baseline:** log writes and basic invoke.
    Lambda,

    /// Monitoring role for a managed relational database.
    ///
    /// **Baseline:** CloudWatch metrics, plus log delivery when enhanced
    /// monitoring is enabled.
    Rds,

    /// Role for an API Gateway custom authorizer function.
    ///
    /// **Baseline:** one invoke grant per configured API Gateway ARN.
    Authorizer,

    /// Role assembled entirely from policy files.
    ///
    /// **Baseline:** none.
    Composite,
}

impl RoleType {
    /// All role types, in declaration order.
    pub const ALL: [RoleType; 4] = [
        RoleType::Lambda,
        RoleType::Rds,
        RoleType::Authorizer,
        RoleType::Composite,
    ];

    /// Returns the configuration tag for this role type.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Lambda => "lambda",
            RoleType::Rds => "rds",
            RoleType::Authorizer => "authorizer",
            RoleType::Composite => "composite",
        }
    }

    /// Returns the name used when no custom role name is configured.
    ///
    /// # Examples
    ///
    /// ```
    /// use rolewright::roles::RoleType;
    ///
    /// assert_eq!(RoleType::Lambda.default_role_name(), "Role-lambda");
    /// ```
    pub fn default_role_name(&self) -> String {
        format!("Role-{}", self.as_str())
    }

    /// Returns the service principal allowed to assume this role.
    ///
    /// Composite roles have no implied trust relationship.
    pub fn trusted_service(&self) -> Option<&'static str> {
        match self {
            RoleType::Lambda | RoleType::Authorizer => Some("lambda.amazonaws.com"),
            RoleType::Rds => Some("monitoring.rds.amazonaws.com"),
            RoleType::Composite => None,
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lambda" => Ok(RoleType::Lambda),
            "rds" => Ok(RoleType::Rds),
            "authorizer" => Ok(RoleType::Authorizer),
            "composite" => Ok(RoleType::Composite),
            other => Err(RoleError::InvalidRoleType(other.to_string())),
        }
    }
}

impl TryFrom<String> for RoleType {
    type Error = RoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
