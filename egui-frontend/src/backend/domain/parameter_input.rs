//! Input boundary for the age and lifespan fields.
//!
//! Everything typed or clicked by the user is normalized here so the grid
//! and milestone functions only ever see non-negative whole years. Bad input
//! is never an error: non-numeric text becomes 0 and negatives clamp to 0.

/// Parse a year field the way a lenient integer parse would: leading
/// whitespace is skipped, an optional sign is accepted, and the leading run
/// of digits is used. Anything else yields 0. The result is clamped to
/// `0..=max_years`.
pub fn parse_year_input(text: &str, max_years: u32) -> u32 {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let leading: &str = {
        let end = digits
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if leading.is_empty() || negative {
        return 0;
    }

    // Saturate huge inputs instead of wrapping or failing
    let value = leading.parse::<u64>().unwrap_or(u64::MAX);
    value.min(max_years as u64) as u32
}

/// Apply a stepper click (+1 / -1) to a year value, clamped to `0..=max_years`
pub fn step_year(current: u32, delta: i32, max_years: u32) -> u32 {
    let stepped = current as i64 + delta as i64;
    stepped.clamp(0, max_years as i64) as u32
}

/// The decrement button is disabled once the value reaches zero
pub fn can_decrement(current: u32) -> bool {
    current > 0
}

pub fn can_increment(current: u32, max_years: u32) -> bool {
    current < max_years
}
