//! Role construction pipeline.
//!
//! `validate → create → base policies → custom policies → optional policies → tags`
//!
//! Validation runs before any handle exists, so a failed build never yields a
//! partially attached role.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::handle::RoleHandle;
use crate::policy::{BasePolicies, PolicyDocument};
use crate::roles::RoleType;
use crate::validator::PolicyValidator;

/// Declarative description of a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleConfiguration {
    /// Policy file names under the policy root, in attachment order.
    #[serde(default)]
    pub policy_files: Vec<String>,

    /// Explicit role name. Absent or empty means `Role-<role_type>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_role_name: Option<String>,

    /// Selects the baseline permissions.
    pub role_type: RoleType,

    /// Grants private-network interface management.
    #[serde(default)]
    pub vpc_access: bool,

    /// Adds enhanced monitoring log delivery. Only meaningful for `rds`.
    #[serde(default)]
    pub enhanced_monitoring: bool,

    /// API Gateway ARNs allowed to invoke the authorizer. Only meaningful for
    /// `authorizer`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub api_gateway_arns: Vec<String>,
}

impl RoleConfiguration {
    /// Creates a configuration with no policy files and no optional flags.
    pub fn new(role_type: RoleType) -> Self {
        Self {
            policy_files: Vec::new(),
            custom_role_name: None,
            role_type,
            vpc_access: false,
            enhanced_monitoring: false,
            api_gateway_arns: Vec::new(),
        }
    }

    pub fn with_policy_file(mut self, file: impl Into<String>) -> Self {
        self.policy_files.push(file.into());
        self
    }

    pub fn with_role_name(mut self, name: impl Into<String>) -> Self {
        self.custom_role_name = Some(name.into());
        self
    }

    pub fn with_vpc_access(mut self, enabled: bool) -> Self {
        self.vpc_access = enabled;
        self
    }

    pub fn with_enhanced_monitoring(mut self, enabled: bool) -> Self {
        self.enhanced_monitoring = enabled;
        self
    }

    pub fn with_api_gateway_arn(mut self, arn: impl Into<String>) -> Self {
        self.api_gateway_arns.push(arn.into());
        self
    }

    /// Returns the custom role name if one was given and is non-empty.
    pub fn custom_name(&self) -> Option<&str> {
        self.custom_role_name.as_deref().filter(|n| !n.is_empty())
    }

    /// Returns the name the built role will carry.
    pub fn effective_name(&self) -> String {
        self.custom_name()
            .map_or_else(|| self.role_type.default_role_name(), str::to_string)
    }
}

/// Tags applied to every role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultTags {
    pub environment: String,
    pub project: String,
}

impl Default for DefaultTags {
    fn default() -> Self {
        Self {
            environment: "Development".to_string(),
            project: "OLTP Role".to_string(),
        }
    }
}

/// Creates an empty handle named after the configuration.
pub fn create_role(role_type: RoleType, custom_role_name: Option<&str>) -> RoleHandle {
    let name = match custom_role_name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => role_type.default_role_name(),
    };
    RoleHandle::new(name, role_type)
}

pub(crate) fn attach_base_policies(handle: &mut RoleHandle, config: &RoleConfiguration) {
    match config.role_type {
        RoleType::Lambda => {
            handle.attach(BasePolicies::lambda_basic_execution());
            handle.attach(BasePolicies::lambda_basic_invoke());
        }
        RoleType::Rds => {
            handle.attach(BasePolicies::rds_monitoring());
            if config.enhanced_monitoring {
                handle.attach(BasePolicies::rds_enhanced_monitoring());
            }
        }
        RoleType::Authorizer => {
            for (index, arn) in config.api_gateway_arns.iter().enumerate() {
                handle.attach(BasePolicies::api_gateway_invoke(index, arn));
            }
        }
        RoleType::Composite => {}
    }
}

pub(crate) fn attach_custom_policies(handle: &mut RoleHandle, documents: &[PolicyDocument]) {
    for document in documents {
        debug!(
            role = %handle.name(),
            file = %document.file,
            statements = document.statements.len(),
            "Attaching custom policy"
        );
        for statement in &document.statements {
            handle.attach(statement.clone());
        }
    }
}

pub(crate) fn attach_optional_policies(handle: &mut RoleHandle, config: &RoleConfiguration) {
    if config.vpc_access {
        handle.attach(BasePolicies::vpc_access());
    }
}

pub(crate) fn tag_role(handle: &mut RoleHandle, config: &RoleConfiguration, defaults: &DefaultTags) {
    handle.tag("Environment", defaults.environment.as_str());
    handle.tag("Project", defaults.project.as_str());
    if let Some(name) = config.custom_name() {
        handle.tag("RoleName", name);
    }
}

/// Builds roles from configurations against a fixed policy root.
///
/// The manager holds no mutable state; builds are independent.
#[derive(Debug, Clone)]
pub struct RoleManager {
    validator: PolicyValidator,
    default_tags: DefaultTags,
}

impl RoleManager {
    /// Creates a manager reading policy files from `policy_root`.
    pub fn new(policy_root: impl Into<PathBuf>) -> Self {
        Self {
            validator: PolicyValidator::new(policy_root),
            default_tags: DefaultTags::default(),
        }
    }

    /// Overrides the `Environment` and `Project` tag values.
    pub fn with_default_tags(mut self, tags: DefaultTags) -> Self {
        self.default_tags = tags;
        self
    }

    pub fn policy_root(&self) -> &Path {
        self.validator.root()
    }

    pub fn validator(&self) -> &PolicyValidator {
        &self.validator
    }

    /// Validates and builds a single role.
    pub fn build_role(&self, config: &RoleConfiguration) -> Result<RoleHandle> {
        let documents = self.validator.validate(&config.policy_files)?;

        let mut handle = create_role(config.role_type, config.custom_role_name.as_deref());
        debug!(role = %handle.name(), role_type = %config.role_type, "Role created");

        attach_base_policies(&mut handle, config);
        attach_custom_policies(&mut handle, &documents);
        attach_optional_policies(&mut handle, config);
        tag_role(&mut handle, config, &self.default_tags);

        info!(
            role = %handle.name(),
            role_type = %handle.role_type(),
            statements = handle.statements().len(),
            "Role built"
        );
        Ok(handle)
    }

    /// Builds roles in order, stopping at the first failure.
    pub fn build_all(&self, configs: &[RoleConfiguration]) -> Result<Vec<RoleHandle>> {
        configs.iter().map(|c| self.build_role(c)).collect()
    }
}

/// Builds a role with the default tags.
pub fn build_role(policy_root: impl AsRef<Path>, config: &RoleConfiguration) -> Result<RoleHandle> {
    RoleManager::new(policy_root.as_ref()).build_role(config)
}
