//! # rolewright: role configuration validation and building
//!
//! Turns a declarative [`RoleConfiguration`] into a [`RoleHandle`] that
//! infrastructure constructs attach as an execution or access identity:
//! - **Policy file validation** (existence and structure, fail-fast)
//! - **Baseline permissions** per role type
//! - **Custom permissions** from policy files, in file order
//! - **Optional capabilities** (private-network access)
//! - **Descriptive tags** for inventory and ownership
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  RoleConfiguration                           │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  RoleManager::build_role                     │
//! │  ├─ PolicyValidator (read + parse files)     │
//! │  ├─ create_role (name from type or custom)   │
//! │  ├─ base policies (match on RoleType)        │
//! │  ├─ custom policies (file statements)        │
//! │  ├─ optional policies (vpc_access)           │
//! │  └─ tags (Environment, Project, RoleName)    │
//! └─────────────────┬───────────────────────────┘
//!                   │
//!                   ▼
//! ┌─────────────────────────────────────────────┐
//! │  RoleHandle                                  │
//! │  - name, trusted service                     │
//! │  - ordered statements                        │
//! │  - key-unique tags                           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Baseline Permissions
//!
//! | Role type  | Statements                                              |
//! |------------|---------------------------------------------------------|
//! | lambda     | `LambdaBasicExecution`, `LambdaBasicInvoke`             |
//! | rds        | `RdsMonitoring` (+ `RdsEnhancedMonitoring` if enabled)  |
//! | authorizer | `ApiGatewayInvoke<N>` per configured API Gateway ARN    |
//! | composite  | none                                                    |
//!
//! `vpc_access = true` appends `VpcAccess` after the policy file statements.
//!
//! ## Examples
//!
//! ```
//! use rolewright::{RoleConfiguration, RoleManager, RoleType};
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(
//!     dir.path().join("bucket.json"),
//!     r#"{"Statement": [{"Effect": "Allow", "Action": "s3:GetObject", "Resource": "*"}]}"#,
//! )?;
//!
//! let config = RoleConfiguration::new(RoleType::Lambda)
//!     .with_policy_file("bucket.json")
//!     .with_role_name("MyLambdaRole")
//!     .with_vpc_access(true);
//!
//! let role = RoleManager::new(dir.path()).build_role(&config)?;
//!
//! assert_eq!(role.name(), "MyLambdaRole");
//! assert_eq!(role.statements().len(), 4);
//! assert_eq!(role.tags().get("RoleName"), Some("MyLambdaRole"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod error;
pub mod handle;
pub mod policy;
pub mod roles;
pub mod secrets;
pub mod statement;
pub mod validator;

// Re-export commonly used types
pub use builder::{DefaultTags, RoleConfiguration, RoleManager, build_role, create_role};
pub use error::{Result, RoleError};
pub use handle::{RoleHandle, TagSet};
pub use policy::{BasePolicies, PolicyDocument};
pub use roles::RoleType;
pub use secrets::{SecretBundle, SecretsConfig};
pub use statement::{Effect, PolicyStatement};
pub use validator::PolicyValidator;
