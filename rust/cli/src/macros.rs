//! Macros for common CLI error handling patterns.

/// Parse a JSON line or continue to the next iteration on error.
///
/// Parse failures are reported on the error stream with the given context
/// and the loop moves on to the next line.
///
/// # Examples
///
/// ```ignore
/// let record: GameRecord = parse_json_or_continue!(line, err, format!("game {}", n));
/// ```
#[macro_export]
macro_rules! parse_json_or_continue {
    ($line:expr, $err:expr, $context:expr) => {
        match serde_json::from_str($line) {
            Ok(r) => r,
            Err(e) => {
                let _ =
                    $crate::ui::write_error($err, &format!("Failed to parse {}: {}", $context, e));
                continue;
            }
        }
    };
}
