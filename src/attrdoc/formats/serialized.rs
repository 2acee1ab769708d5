//! serde-backed formats
//!
//! Nodes serialize as `{tag, value?, children?}`; absent values and empty
//! child lists are omitted. Indentation is parse-time bookkeeping and is
//! never written.

use super::registry::{FormatError, Formatter};
use crate::attrdoc::ast::Node;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        let mut json = serde_json::to_string_pretty(root)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, root: &Node) -> Result<String, FormatError> {
        serde_yaml::to_string(root).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "YAML"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrdoc::parsing::parse_document;

    const SOURCE: &str = "\\member size \\type= size_t\n    \\also length\n\\p done\n";

    #[test]
    fn test_json_structure() {
        let root = parse_document(SOURCE);
        let json = JsonFormatter.serialize(&root).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["tag"], "");
        assert!(value.get("value").is_none());
        assert_eq!(value["children"][0]["tag"], "member");
        assert_eq!(value["children"][0]["children"][0]["value"], "size_t");
        assert_eq!(value["children"][0]["children"][1]["value"], "length");
        assert_eq!(value["children"][1]["value"], "done");
        assert!(value["children"][1].get("children").is_none());
    }

    #[test]
    fn test_yaml_matches_json() {
        let root = parse_document(SOURCE);
        let yaml = YamlFormatter.serialize(&root).unwrap();
        let json = JsonFormatter.serialize(&root).unwrap();

        let from_yaml: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
        let from_json: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(from_yaml, from_json);
    }
}
