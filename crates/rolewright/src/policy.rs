//! Policy documents and the built-in permission sets.
//!
//! Built-in sets mirror the AWS managed policies each role type normally
//! carries, expressed inline so the resulting role description is complete
//! without resolving managed-policy ARNs.

use serde::Deserialize;
use serde_json::Value;

use crate::statement::PolicyStatement;

/// A parsed policy file: its name and its statements in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyDocument {
    /// File name as given in the role configuration.
    pub file: String,

    /// Statements in the order they appear in the file.
    pub statements: Vec<PolicyStatement>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StatementBlock {
    One(PolicyStatement),
    Many(Vec<PolicyStatement>),
}

impl From<StatementBlock> for Vec<PolicyStatement> {
    fn from(block: StatementBlock) -> Self {
        match block {
            StatementBlock::One(stmt) => vec![stmt],
            StatementBlock::Many(stmts) => stmts,
        }
    }
}

impl PolicyDocument {
    /// Parses policy file content.
    ///
    /// Accepted shapes:
    /// - an IAM policy document: `{"Version": ..., "Statement": stmt | [stmt, ...]}`
    /// - a single statement object
    /// - an array of statement objects
    ///
    /// Returns a human-readable reason on failure.
    pub fn parse(file: impl Into<String>, content: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

        let statements: Vec<PolicyStatement> = match value {
            Value::Object(ref map) if map.contains_key("Statement") => {
                let block = map.get("Statement").cloned().unwrap_or(Value::Null);
                serde_json::from_value::<StatementBlock>(block)
                    .map_err(|_| "\"Statement\" is not a statement or list of statements".to_string())?
                    .into()
            }
            Value::Object(_) => vec![
                serde_json::from_value(value)
                    .map_err(|e| format!("not a policy statement: {e}"))?,
            ],
            Value::Array(_) => serde_json::from_value(value)
                .map_err(|e| format!("not a list of policy statements: {e}"))?,
            _ => return Err("expected a policy document, statement, or list of statements".into()),
        };

        if let Some(index) = statements.iter().position(|s| s.actions.is_empty()) {
            return Err(format!("statement {index} has no actions"));
        }

        Ok(Self {
            file: file.into(),
            statements,
        })
    }
}

/// Built-in permission sets.
pub struct BasePolicies;

impl BasePolicies {
    /// Log delivery for a function (`AWSLambdaBasicExecutionRole`).
    pub fn lambda_basic_execution() -> PolicyStatement {
        PolicyStatement::allow(
            [
                "logs:CreateLogGroup",
                "logs:CreateLogStream",
                "logs:PutLogEvents",
            ],
            ["arn:aws:logs:*:*:*"],
        )
        .with_sid("LambdaBasicExecution")
    }

    /// Lets the function invoke other functions.
    pub fn lambda_basic_invoke() -> PolicyStatement {
        PolicyStatement::allow(["lambda:InvokeFunction"], ["*"]).with_sid("LambdaBasicInvoke")
    }

    /// Standard CloudWatch metric access for a database role.
    pub fn rds_monitoring() -> PolicyStatement {
        PolicyStatement::allow(
            [
                "cloudwatch:PutMetricData",
                "cloudwatch:GetMetricStatistics",
                "cloudwatch:ListMetrics",
            ],
            ["*"],
        )
        .with_sid("RdsMonitoring")
    }

    /// OS-level metric delivery (`AmazonRDSEnhancedMonitoringRole`).
    pub fn rds_enhanced_monitoring() -> PolicyStatement {
        PolicyStatement::allow(
            [
                "logs:CreateLogGroup",
                "logs:PutRetentionPolicy",
                "logs:CreateLogStream",
                "logs:PutLogEvents",
                "logs:DescribeLogStreams",
                "logs:GetLogEvents",
            ],
            ["arn:aws:logs:*:*:log-group:RDS*"],
        )
        .with_sid("RdsEnhancedMonitoring")
    }

    /// Invoke grant for a single API Gateway source ARN.
    ///
    /// `index` keeps statement ids unique when several ARNs are configured.
    pub fn api_gateway_invoke(index: usize, source_arn: &str) -> PolicyStatement {
        PolicyStatement::allow(["lambda:InvokeFunction"], ["*"])
            .with_sid(format!("ApiGatewayInvoke{index}"))
            .with_service_principal("apigateway.amazonaws.com")
            .with_condition("ArnLike", "aws:SourceArn", source_arn)
    }

    /// Network interface management for functions in a private network
    /// (`AWSLambdaVPCAccessExecutionRole`).
    pub fn vpc_access() -> PolicyStatement {
        PolicyStatement::allow(
            [
                "ec2:CreateNetworkInterface",
                "ec2:DescribeNetworkInterfaces",
                "ec2:DeleteNetworkInterface",
                "ec2:AssignPrivateIpAddresses",
                "ec2:UnassignPrivateIpAddresses",
            ],
            ["*"],
        )
        .with_sid("VpcAccess")
    }
}
