//! Helpers for messages written to stderr.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_warning_prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad bid").unwrap();
        display_warning(&mut buf, "game abandoned").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Error: bad bid\nWARNING: game abandoned\n");
    }
}
