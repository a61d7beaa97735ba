use time::OffsetDateTime;

/// Trimmed, non-empty todo text, or `None` when nothing remains.
pub fn clean_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Completion transition for updates: an explicit `true` stamps the time,
/// anything else (explicit false or absent) clears both fields.
pub fn completion_update(completed: Option<bool>) -> (bool, Option<OffsetDateTime>) {
    if completed == Some(true) {
        (true, Some(OffsetDateTime::now_utc()))
    } else {
        (false, None)
    }
}
