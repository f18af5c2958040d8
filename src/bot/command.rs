//! Telegram command parsing.

/// Supported Telegram commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Latest,
}

/// Parse a Telegram message into a bot command.
///
/// Tolerates the `@botname` suffix Telegram appends in group chats.
/// Returns `None` for non-command text and unknown commands.
#[must_use]
pub fn parse_command(text: &str) -> Option<BotCommand> {
    let raw = text.split_whitespace().next()?;
    if !raw.starts_with('/') {
        return None;
    }

    let command = raw.split_once('@').map_or(raw, |(head, _)| head);

    match command {
        "/start" => Some(BotCommand::Start),
        "/latest" => Some(BotCommand::Latest),
        _ => None,
    }
}

/// Greeting returned by `/start`.
#[must_use]
pub const fn greeting() -> &'static str {
    "سلام! من ربات قیمت‌های لحظه‌ای هستم. برای دریافت قیمت‌ها از دستور /latest استفاده کنید."
}

/// Notice sent when the report pipeline fails.
#[must_use]
pub const fn fetch_failed_notice() -> &'static str {
    "❌ دریافت قیمت‌ها با خطا مواجه شد. لطفاً کمی بعد دوباره تلاش کنید."
}

/// Bot commands for Telegram menu registration.
///
/// Returns tuples of (command, description) for `set_my_commands`.
#[must_use]
pub fn bot_commands() -> Vec<(&'static str, &'static str)> {
    vec![
        ("start", "معرفی ربات"),
        ("latest", "قیمت‌های لحظه‌ای ارز، طلا و رمزارز"),
    ]
}
