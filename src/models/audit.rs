//! Audit records for fee decisions.

use serde::{Deserialize, Serialize};

/// A single audited rule application.
///
/// Each step captures the input, output, and reasoning for a rule application
/// so a fee shown to a user can be explained after the fact.
///
/// # Example
///
/// ```
/// use transfer_fee_engine::models::AuditStep;
///
/// let step = AuditStep {
///     rule_id: "transfer_fee".to_string(),
///     rule_name: "Transfer Fee".to_string(),
///     input: serde_json::json!({ "amount": "100" }),
///     output: serde_json::json!({ "fee": "2.00" }),
///     reasoning: "1% of $100.00 = $1.00 (raised to minimum fee $2.00)".to_string(),
/// };
/// assert_eq!(step.output["fee"], "2.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
