//! File and stream helpers shared by the commands.
//!
//! - [`read_stdin_line`]: one trimmed line from the bid source
//! - [`read_text_auto`]: game record files, transparently decompressing `.zst`
//! - [`ensure_parent_dir`]: create the directory for an output file
//!
//! Failures come back as `String` and convert into [`crate::CliError`].

use std::io::BufRead;

/// Reads one line, trimmed. `None` on EOF or a read error.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// # use gavel_cli::io_utils::read_stdin_line;
///
/// let mut input = Cursor::new("  AH 2C \n");
/// assert_eq!(read_stdin_line(&mut input), Some("AH 2C".to_string()));
/// assert_eq!(read_stdin_line(&mut input), None);
/// ```
pub fn read_stdin_line(stdin: &mut dyn BufRead) -> Option<String> {
    let mut line = String::new();
    match stdin.read_line(&mut line) {
        Ok(0) => None, // EOF
        Ok(_) => Some(line.trim().to_string()),
        Err(_) => None,
    }
}

/// Reads a text file, decompressing it with Zstandard when the path ends in
/// `.zst`. A leading UTF-8 BOM is dropped.
///
/// # Example
///
/// ```rust,no_run
/// # use gavel_cli::io_utils::read_text_auto;
/// let plain = read_text_auto("data/games.jsonl").unwrap();
/// let packed = read_text_auto("data/games.jsonl.zst").unwrap();
/// ```
pub fn read_text_auto(path: &str) -> Result<String, String> {
    let mut content = if path.ends_with(".zst") {
        let comp = std::fs::read(path).map_err(|e| e.to_string())?;
        let dec = zstd::bulk::decompress(&comp, 8 * 1024 * 1024).map_err(|e| e.to_string())?;
        String::from_utf8(dec).map_err(|e| e.to_string())?
    } else {
        std::fs::read_to_string(path).map_err(|e| e.to_string())?
    };
    strip_utf8_bom(&mut content);
    Ok(content)
}

/// Creates the parent directory of `path` (and any missing ancestors).
pub fn ensure_parent_dir(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }
    }
    Ok(())
}

fn strip_utf8_bom(s: &mut String) {
    const UTF8_BOM: &str = "\u{feff}";
    if s.starts_with(UTF8_BOM) {
        s.drain(..UTF8_BOM.len());
    }
}
