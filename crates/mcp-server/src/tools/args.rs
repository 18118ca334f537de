//! Tool argument decoding

use cspr_cloud::{PageRequest, DEFAULT_PAGE_SIZE};
use serde_json::{Map, Value};

use crate::protocol::McpError;

/// Arguments of one `tools/call`
#[derive(Debug, Default)]
pub struct ToolArgs {
    values: Map<String, Value>,
}

impl ToolArgs {
    /// Absent or `null` arguments are an empty set
    pub fn from_value(arguments: Option<Value>) -> Result<Self, McpError> {
        match arguments {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Object(values)) => Ok(Self { values }),
            Some(_) => Err(McpError::invalid_params("Tool arguments must be an object")),
        }
    }

    /// Required string argument. Numbers are accepted in their textual form.
    pub fn text(&self, name: &str) -> Result<String, McpError> {
        self.optional_text(name)
            .ok_or_else(|| McpError::invalid_params(format!("Missing required argument: {}", name)))
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        match self.values.get(name)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// `page` / `pageSize`, normalized into a [`PageRequest`]
    pub fn page(&self) -> PageRequest {
        let page = self.integer("page").unwrap_or(1);
        let page_size = self
            .integer("pageSize")
            .unwrap_or(i64::from(DEFAULT_PAGE_SIZE));
        PageRequest::new(to_u32(page), to_u32(page_size))
    }

    fn integer(&self, name: &str) -> Option<i64> {
        match self.values.get(name)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_arguments() {
        let args = ToolArgs::from_value(Some(json!({
            "publicKey": "01abc",
            "currencyId": 1,
        })))
        .unwrap();

        assert_eq!(args.text("publicKey").unwrap(), "01abc");
        assert_eq!(args.text("currencyId").unwrap(), "1");
        assert_eq!(args.optional_text("targetContractPackageHash"), None);

        let err = args.text("blockHash").unwrap_err();
        assert_eq!(err.code, -32602);
        assert_eq!(err.message, "Missing required argument: blockHash");
    }

    #[test]
    fn test_page_defaults_and_clamping() {
        let args = ToolArgs::from_value(None).unwrap();
        assert_eq!(args.page(), PageRequest::new(1, 10));

        let args = ToolArgs::from_value(Some(json!({"page": 3, "pageSize": 500}))).unwrap();
        assert_eq!(args.page().page(), 3);
        assert_eq!(args.page().page_size(), 250);

        let args = ToolArgs::from_value(Some(json!({"page": -4, "pageSize": "25"}))).unwrap();
        assert_eq!(args.page().page(), 1);
        assert_eq!(args.page().page_size(), 25);

        let args = ToolArgs::from_value(Some(json!({"page": 0}))).unwrap();
        assert_eq!(args.page().page(), 1);
    }

    #[test]
    fn test_non_object_arguments() {
        assert!(ToolArgs::from_value(Some(Value::Null)).is_ok());
        let err = ToolArgs::from_value(Some(json!([1, 2]))).unwrap_err();
        assert_eq!(err.code, -32602);
    }
}
