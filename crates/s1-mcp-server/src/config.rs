//! Server configuration

/// Environment variable overriding the tool name prefix
pub const TOOL_PREFIX_ENV: &str = "S1_MCP_TOOL_PREFIX";

/// Configuration for the tool server
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Prefix prepended to every advertised tool name (default: `s1_`)
    pub tool_prefix: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            tool_prefix: "s1_".into(),
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(prefix) = lookup(TOOL_PREFIX_ENV) {
            config.tool_prefix = prefix;
        }
        config
    }
}
