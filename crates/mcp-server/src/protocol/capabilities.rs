//! Server capabilities

use serde::{Deserialize, Serialize};

/// Capabilities advertised in the `initialize` result. The tool catalog is
/// fixed, so only `tools` is ever set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

impl ServerCapabilities {
    pub fn with_tools() -> Self {
        Self {
            tools: Some(ToolsCapability { list_changed: false }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    pub list_changed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tools_only() {
        let value = serde_json::to_value(ServerCapabilities::with_tools()).unwrap();
        assert_eq!(value, serde_json::json!({"tools": {"listChanged": false}}));
    }
}
