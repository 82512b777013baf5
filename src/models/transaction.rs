//! Wire model for transaction blocks.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Execution status of a transaction block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Failure,
    Pending,
    #[default]
    Unknown,
}

impl TxStatus {
    /// Case-insensitive parse of the node's status string.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Failure => "\u{2715}",
            Self::Pending => "\u{22ef}",
            Self::Unknown => "?",
        }
    }
}

/// A transaction block as returned by `suix_queryTransactionBlocks`.
/// Read-only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransactionRecord {
    pub digest: String,
    /// Arrives as a JSON string on current nodes, a number on older ones;
    /// anything unparseable becomes `None`.
    #[serde(rename = "timestampMs", deserialize_with = "de_timestamp_ms")]
    pub timestamp_ms: Option<u64>,
    kind: Option<String>,
    effects: Option<TxEffects>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct TxEffects {
    status: Option<StatusWire>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
struct StatusWire {
    status: String,
}

impl TransactionRecord {
    pub fn status(&self) -> TxStatus {
        TxStatus::parse(self.status_raw())
    }

    /// The node's own status string, defaulted when effects are absent.
    pub fn status_raw(&self) -> &str {
        self.effects
            .as_ref()
            .and_then(|e| e.status.as_ref())
            .map(|s| s.status.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn kind_label(&self) -> &str {
        self.kind
            .as_deref()
            .filter(|k| !k.is_empty())
            .unwrap_or("Transaction")
    }
}

fn de_timestamp_ms<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> TransactionRecord {
        serde_json::from_value(value).expect("record should deserialize")
    }

    #[test]
    fn status_parse_is_case_insensitive() {
        assert_eq!(TxStatus::parse("success"), TxStatus::Success);
        assert_eq!(TxStatus::parse("SUCCESS"), TxStatus::Success);
        assert_eq!(TxStatus::parse("Failure"), TxStatus::Failure);
        assert_eq!(TxStatus::parse("pending"), TxStatus::Pending);
        assert_eq!(TxStatus::parse("whatever"), TxStatus::Unknown);
        assert_eq!(TxStatus::parse(""), TxStatus::Unknown);
    }

    #[test]
    fn timestamp_parses_string_and_number() {
        let as_string = record(json!({ "digest": "D1", "timestampMs": "1000" }));
        assert_eq!(as_string.timestamp_ms, Some(1000));

        let as_number = record(json!({ "digest": "D2", "timestampMs": 1000 }));
        assert_eq!(as_number.timestamp_ms, Some(1000));

        let missing = record(json!({ "digest": "D3" }));
        assert_eq!(missing.timestamp_ms, None);

        let garbage = record(json!({ "digest": "D4", "timestampMs": "not-a-number" }));
        assert_eq!(garbage.timestamp_ms, None);
    }

    #[test]
    fn status_read_from_effects() {
        let tx = record(json!({
            "digest": "D1",
            "effects": { "status": { "status": "success" } }
        }));
        assert_eq!(tx.status(), TxStatus::Success);
        assert_eq!(tx.status_raw(), "success");

        let bare = record(json!({ "digest": "D2" }));
        assert_eq!(bare.status(), TxStatus::Unknown);
        assert_eq!(bare.status_raw(), "Unknown");
    }

    #[test]
    fn kind_label_defaults() {
        let bare = record(json!({ "digest": "D1" }));
        assert_eq!(bare.kind_label(), "Transaction");

        let kinded = record(json!({ "digest": "D2", "kind": "ProgrammableTransaction" }));
        assert_eq!(kinded.kind_label(), "ProgrammableTransaction");
    }
}
