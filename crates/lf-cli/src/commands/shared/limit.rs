/// Row limit with precedence: command flag, then global `--limit`, then the
/// configured default.
#[must_use]
pub fn effective_limit(local: Option<u32>, global: Option<u32>, fallback: u32) -> u32 {
    local.or(global).unwrap_or(fallback)
}

/// Keep at most `limit` rows, preserving order.
pub fn apply_limit<T>(rows: &mut Vec<T>, limit: u32) {
    rows.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
}
