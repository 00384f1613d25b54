//! Normalized result of one agent stage
//!
//! Models are asked for `{"thought", "message", "data": {"tags", "summary"}, "issues"}`.
//! The block keeps those fields flat; `to_wire` restores the nested shape for
//! display and for handing the Planner output to the Reviewer.

use serde::Serialize;
use serde_json::{Map, Value};

/// Max tags a block keeps from raw model output
const MAX_TAGS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentBlock {
    pub thought: String,
    pub message: String,

    /// Raw tags as the model wrote them (case and whitespace untouched)
    pub tags: Vec<String>,

    pub summary: String,

    /// Opaque issue entries reported by the model
    pub issues: Vec<Value>,
}

impl AgentBlock {
    /// Decode a block from an extracted JSON object.
    ///
    /// Total: missing or wrongly-typed fields fall back to empty values.
    /// `issues` is read from the top level first, then from `data`.
    pub fn from_object(object: &Map<String, Value>) -> Self {
        let data = object.get("data").and_then(Value::as_object);

        let tags = data
            .and_then(|d| d.get("tags"))
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .take(MAX_TAGS)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let issues = object
            .get("issues")
            .and_then(Value::as_array)
            .or_else(|| data.and_then(|d| d.get("issues")).and_then(Value::as_array))
            .cloned()
            .unwrap_or_default();

        Self {
            thought: string_field(Some(object), "thought"),
            message: string_field(Some(object), "message"),
            tags,
            summary: string_field(data, "summary"),
            issues,
        }
    }

    /// Whether the block carries a draft worth enforcing.
    ///
    /// Issues alone do not count: a Reviewer reply with empty tags, a blank
    /// summary and a list of issues leaves the Planner's draft in place, and
    /// only its issues reach the package.
    pub fn has_draft(&self) -> bool {
        !self.tags.is_empty() || !self.summary.trim().is_empty()
    }

    /// Nested wire shape: `{"thought", "message", "data": {"tags", "summary", "issues"}}`
    pub fn to_wire(&self) -> WireBlock<'_> {
        WireBlock {
            thought: &self.thought,
            message: &self.message,
            data: WireData {
                tags: &self.tags,
                summary: &self.summary,
                issues: &self.issues,
            },
        }
    }
}

/// Serialized view of a block; field order is the order models are asked for
#[derive(Debug, Serialize)]
pub struct WireBlock<'a> {
    pub thought: &'a str,
    pub message: &'a str,
    pub data: WireData<'a>,
}

#[derive(Debug, Serialize)]
pub struct WireData<'a> {
    pub tags: &'a [String],
    pub summary: &'a str,
    pub issues: &'a [Value],
}

fn string_field(object: Option<&Map<String, Value>>, key: &str) -> String {
    object
        .and_then(|o| o.get(key))
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_decode_full_block() {
        let block = AgentBlock::from_object(&object(json!({
            "thought": "looks fine",
            "message": "Tagged the post",
            "data": {"tags": ["Rust", "cli", "llm", "extra"], "summary": "A tool."},
            "issues": ["summary too short"]
        })));

        assert_eq!(block.thought, "looks fine");
        assert_eq!(block.message, "Tagged the post");
        assert_eq!(block.tags, vec!["Rust", "cli", "llm"]);
        assert_eq!(block.summary, "A tool.");
        assert_eq!(block.issues, vec![json!("summary too short")]);
    }

    #[test]
    fn test_decode_wrong_types_default() {
        let block = AgentBlock::from_object(&object(json!({
            "thought": 42,
            "data": {"tags": "rust", "summary": ["nope"]},
            "issues": {"not": "a list"}
        })));

        assert_eq!(block, AgentBlock::default());
    }

    #[test]
    fn test_decode_drops_non_string_tags() {
        let block = AgentBlock::from_object(&object(json!({
            "data": {"tags": [1, "a", null, "b", {"x": 1}, "c", "d"]}
        })));
        assert_eq!(block.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_decode_issues_fallback_to_data() {
        let block = AgentBlock::from_object(&object(json!({
            "data": {"issues": [{"field": "tags"}]}
        })));
        assert_eq!(block.issues, vec![json!({"field": "tags"})]);
    }

    #[test]
    fn test_flat_payload_is_not_a_draft() {
        let block = AgentBlock::from_object(&object(json!({
            "tags": ["a", "b", "c"],
            "summary": "Flat."
        })));
        assert!(!block.has_draft());
    }

    #[test]
    fn test_issues_only_is_not_a_draft() {
        let block = AgentBlock::from_object(&object(json!({
            "data": {"tags": [], "summary": ""},
            "issues": ["x"]
        })));
        assert_eq!(block.issues, vec![json!("x")]);
        assert!(!block.has_draft());
    }

    #[test]
    fn test_wire_field_order() {
        let text = serde_json::to_string(&AgentBlock::default().to_wire()).unwrap();
        assert_eq!(
            text,
            r#"{"thought":"","message":"","data":{"tags":[],"summary":"","issues":[]}}"#
        );
    }

    #[test]
    fn test_wire_shape_decodes_back() {
        let block = AgentBlock {
            thought: "t".to_string(),
            message: "m".to_string(),
            tags: vec!["a".to_string()],
            summary: "s.".to_string(),
            issues: vec![json!("i")],
        };
        let wire = serde_json::to_value(block.to_wire()).unwrap();
        assert_eq!(wire["data"]["tags"][0], "a");
        assert_eq!(AgentBlock::from_object(wire.as_object().unwrap()), block);
    }
}
