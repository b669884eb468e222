/// Subsystem tags attached to every log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Cache,
    Provider,
    Scoring,
    Config,
    Webserver,
}

impl LogTag {
    /// Key used by `--debug <key>` to enable debug output for this tag
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Cache => "cache",
            LogTag::Provider => "providers",
            LogTag::Scoring => "scoring",
            LogTag::Config => "config",
            LogTag::Webserver => "webserver",
        }
    }

    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Cache => "CACHE",
            LogTag::Provider => "PROVIDER",
            LogTag::Scoring => "SCORING",
            LogTag::Config => "CONFIG",
            LogTag::Webserver => "WEBSERVER",
        }
    }

    pub fn from_debug_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "system" => Some(LogTag::System),
            "cache" => Some(LogTag::Cache),
            "providers" | "provider" => Some(LogTag::Provider),
            "scoring" => Some(LogTag::Scoring),
            "config" => Some(LogTag::Config),
            "webserver" | "web" => Some(LogTag::Webserver),
            _ => None,
        }
    }
}
