use std::env;

use teloxide::types::ChatId;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Can't read {0} from env")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bot_token: String,
    pub support_chat_id: ChatId,
    pub public_url: Option<String>,
    pub port: u16,
    pub sentry_url: Option<String>,
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(name))
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = required(&lookup, "BOT_TOKEN")?;

        let support_chat_id = required(&lookup, "SUPPORT_CHAT_ID")?;
        let support_chat_id = support_chat_id
            .trim()
            .parse::<i64>()
            .map(ChatId)
            .map_err(|_| ConfigError::Invalid {
                name: "SUPPORT_CHAT_ID",
                value: support_chat_id,
            })?;

        let port = match optional(&lookup, "PORT") {
            Some(port) => port.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: port,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            bot_token,
            support_chat_id,
            public_url: optional(&lookup, "PUBLIC_URL")
                .map(|url| url.trim_end_matches('/').to_string()),
            port,
            sentry_url: optional(&lookup, "SENTRY_URL"),
        })
    }

    /// Public URL the platform should deliver updates to.
    pub fn webhook_url(&self) -> Result<String, ConfigError> {
        let base = self
            .public_url
            .as_deref()
            .ok_or(ConfigError::Missing("PUBLIC_URL"))?;
        Ok(format!("{}/webhook/{}", base, self.bot_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn reads_required_and_defaults() {
        let config =
            Config::from_lookup(lookup(&[("BOT_TOKEN", "123:abc"), ("SUPPORT_CHAT_ID", "-100")]))
                .unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.support_chat_id, ChatId(-100));
        assert_eq!(config.port, 8080);
        assert!(config.public_url.is_none());
        assert!(config.sentry_url.is_none());
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = Config::from_lookup(lookup(&[("SUPPORT_CHAT_ID", "1")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("BOT_TOKEN"));
    }

    #[test]
    fn rejects_non_numeric_chat_id_and_port() {
        let err = Config::from_lookup(lookup(&[("BOT_TOKEN", "t"), ("SUPPORT_CHAT_ID", "ops")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SUPPORT_CHAT_ID", .. }));

        let err = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "t"),
            ("SUPPORT_CHAT_ID", "1"),
            ("PORT", "http"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn webhook_url_joins_base_and_token() {
        let config = Config::from_lookup(lookup(&[
            ("BOT_TOKEN", "123:abc"),
            ("SUPPORT_CHAT_ID", "1"),
            ("PUBLIC_URL", "https://desk.example.org/"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(
            config.webhook_url().unwrap(),
            "https://desk.example.org/webhook/123:abc"
        );
    }
}
