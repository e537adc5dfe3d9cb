//! Parser for the java-properties text form message bundles are kept in.
//!
//! Covers the subset the bundles actually use: `#`/`!` comments, blank
//! lines, `=`/`:`/whitespace key separators, backslash escapes (including
//! `\uXXXX`), and backslash line continuation. Entries are returned in file
//! order with duplicates preserved so catalog construction can reject them.

use anyhow::{Context, Result, anyhow};

/// Parse properties text into raw `(key, value)` pairs.
pub fn parse_properties(input: &str) -> Result<Vec<(String, String)>> {
    let lines: Vec<&str> = input.lines().collect();
    let mut entries = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim_start();
        i += 1;
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let mut logical = line.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.get(i) {
                Some(next) => {
                    logical.push_str(next.trim_start());
                    i += 1;
                }
                None => break,
            }
        }
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key).with_context(|| format!("in property line: {logical}"))?;
        let value = unescape(raw_value).with_context(|| format!("in property line: {logical}"))?;
        entries.push((key, value));
    }
    Ok(entries)
}

/// A logical line continues when it ends with an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split a logical line into raw (still escaped) key and value parts.
///
/// The key runs to the first unescaped `=`, `:`, or whitespace; after it,
/// at most one `=` or `:` (plus surrounding whitespace) is consumed as the
/// separator and the remainder is the value.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut chars = line.char_indices();
    let mut key_end = line.len();
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            chars.next();
            continue;
        }
        if c == '=' || c == ':' || c.is_whitespace() {
            key_end = idx;
            break;
        }
    }
    let key = &line[..key_end];
    let rest = line[key_end..].trim_start();
    let value = match rest.strip_prefix(['=', ':']) {
        Some(after) => after.trim_start(),
        None => rest,
    };
    (key, value)
}

fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            // A dangling escape at end of input is dropped, as
            // java.util.Properties does.
            None => break,
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let mut code = 0u32;
                for _ in 0..4 {
                    let digit = chars
                        .next()
                        .and_then(|d| d.to_digit(16))
                        .ok_or_else(|| anyhow!("invalid \\u escape: expected 4 hex digits"))?;
                    code = code * 16 + digit;
                }
                let decoded = char::from_u32(code)
                    .ok_or_else(|| anyhow!("\\u escape U+{code:04X} is not a valid character"))?;
                out.push(decoded);
            }
            Some(other) => out.push(other),
        }
    }
    Ok(out)
}
