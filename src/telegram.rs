use crate::config::Config;
use anyhow::Result;
use log::debug;
use std::time::Duration;
use teloxide::net;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::Bot;
use teloxide::requests::Requester;
use teloxide::types::{ChatId, ParseMode};

/// Outbound Telegram collaborator. Built once at startup from the config;
/// handlers only ever see `send`.
pub struct Notifier {
    bot: Bot,
    chat_id: ChatId,
}

impl Notifier {
    pub fn new(config: &Config) -> Result<Self> {
        let client = net::default_reqwest_settings().timeout(Duration::from_secs(30));
        let bot = Bot::with_client(config.token.clone(), client.build()?)
            .set_api_url(config.api_url.parse()?);
        Ok(Self {
            bot,
            chat_id: ChatId(config.chat_id),
        })
    }

    pub async fn send(&self, text: &str) -> Result<()> {
        debug!("Sending {} chars to chat {}", text.len(), self.chat_id);
        self.bot
            .send_message(self.chat_id, text)
            .parse_mode(ParseMode::MarkdownV2)
            .await?;
        Ok(())
    }
}
