#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub base_url: String,
    /// Missing credential does not prevent startup; chat requests fail fast instead.
    pub api_key: Option<String>,
    pub model: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

impl Config {
    pub fn credential_configured(&self) -> bool {
        self.llm
            .api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            model: default_model(),
            system_prompt: default_system_prompt(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    "https://openrouter.ai/api/v1".to_string()
}

fn default_model() -> String {
    "openai/gpt-3.5-turbo".to_string()
}

fn default_system_prompt() -> String {
    "Eres un asistente útil y amigable para WhatsApp. Responde en español de \
     manera natural, clara y concisa. Usa emojis apropiados."
        .to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_secs() -> u64 {
    25
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_llm_defaults_match_deploy_constants() {
        let llm = LlmConfig::default();
        assert_eq!(llm.base_url, "https://openrouter.ai/api/v1");
        assert_eq!(llm.model, "openai/gpt-3.5-turbo");
        assert_eq!(llm.max_tokens, 500);
        assert_eq!(llm.temperature, 0.7);
        assert_eq!(llm.timeout_secs, 25);
        assert!(llm.api_key.is_none());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
        assert_eq!(server.logs.level, "info");
    }

    #[test]
    fn test_credential_configured() {
        let mut config = Config {
            llm: LlmConfig::default(),
            server: ServerConfig::default(),
        };
        assert!(!config.credential_configured());

        config.llm.api_key = Some("   ".to_string());
        assert!(!config.credential_configured());

        config.llm.api_key = Some("sk-or-test".to_string());
        assert!(config.credential_configured());
    }
}
