//! 从环境变量读取终端客户端的运行参数
//!
//! - `GREED_SEED`: 骰子随机数种子，不设置时使用系统熵源
//! - `GREED_MESSAGES`: `text` (默认) 或 `json`，决定游戏消息的输出格式

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    #[default]
    Text,
    /// 每条消息输出一行 JSON
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub message_format: MessageFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(env::var("GREED_SEED").ok(), env::var("GREED_MESSAGES").ok())
    }

    fn from_vars(seed: Option<String>, messages: Option<String>) -> Self {
        let seed = seed.and_then(|s| s.trim().parse().ok());
        let message_format = match messages.as_deref().map(str::trim) {
            Some(f) if f.eq_ignore_ascii_case("json") => MessageFormat::Json,
            _ => MessageFormat::Text,
        };
        Config { seed, message_format }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(Config::from_vars(None, None), Config::default());
    }

    #[test]
    fn test_seed_and_json() {
        let config = Config::from_vars(Some("42".into()), Some("JSON".into()));
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.message_format, MessageFormat::Json);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = Config::from_vars(Some("not-a-seed".into()), Some("xml".into()));
        assert_eq!(config, Config::default());
    }
}
