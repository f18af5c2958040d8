//! Telegram adapter.
//!
//! Long-polling loop that answers `/start` with a greeting and `/latest`
//! with a freshly built price report. The report pipeline itself lives in
//! [`crate::report`]; this module only wires commands to it and forwards
//! the produced text to the chat.

mod command;

pub use command::{parse_command, BotCommand};

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::feed::FeedClient;
use crate::report::PriceReporter;

use command::{bot_commands, fetch_failed_notice, greeting};

/// Run the bot until the polling loop exits.
pub async fn run(config: Config) -> Result<()> {
    let bot = Bot::new(config.bot_token()?);
    let reporter = Arc::new(PriceReporter::new(FeedClient::new(
        config.feed.api_url.clone(),
    )));

    // Register commands with Telegram so they appear in the "/" menu.
    if let Err(e) = register_bot_commands(&bot).await {
        warn!(error = %e, "Failed to register bot commands with Telegram");
    }

    info!("Telegram command listener started");

    teloxide::repl(bot, move |bot: Bot, msg: Message| {
        let reporter = Arc::clone(&reporter);
        async move {
            let Some(text) = msg.text() else {
                return respond(());
            };

            match parse_command(text) {
                Some(BotCommand::Start) => {
                    if let Err(e) = bot.send_message(msg.chat.id, greeting()).await {
                        error!(error = %e, "Failed to send greeting");
                    }
                }
                Some(BotCommand::Latest) => {
                    send_latest_report(&bot, msg.chat.id, &reporter).await;
                }
                None => {}
            }

            respond(())
        }
    })
    .await;

    Ok(())
}

/// Build and deliver the price report, degrading to an error notice when
/// the feed is unreachable.
async fn send_latest_report(bot: &Bot, chat_id: ChatId, reporter: &PriceReporter) {
    let outcome = match reporter.latest_report().await {
        Ok(report) => {
            bot.send_message(chat_id, report)
                .parse_mode(ParseMode::Html)
                .await
        }
        Err(e) => {
            error!(error = %e, "Failed to build price report");
            bot.send_message(chat_id, fetch_failed_notice()).await
        }
    };

    if let Err(e) = outcome {
        error!(error = %e, "Failed to send Telegram message");
    }
}

/// Register bot commands with Telegram for the "/" menu.
async fn register_bot_commands(bot: &Bot) -> std::result::Result<(), teloxide::RequestError> {
    let commands: Vec<teloxide::types::BotCommand> = bot_commands()
        .into_iter()
        .map(|(cmd, desc)| teloxide::types::BotCommand::new(cmd, desc))
        .collect();

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
