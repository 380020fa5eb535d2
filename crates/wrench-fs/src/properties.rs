//! The line-oriented `key=value` properties format
//!
//! ```text
//! # comment
//! ! also a comment
//! com.example.app.hosts.listing = h1,h2
//! com.example.app.banner: multi \
//!     line value
//! com.example.app.greeting=caf\u00e9
//! ```
//!
//! A key ends at the first unescaped `=`, `:` or whitespace. A line ending
//! in an odd number of backslashes continues onto the next line, whose
//! leading whitespace is dropped. Lines end at `\n`, `\r\n` or a bare `\r`.

use std::path::Path;

use indexmap::IndexMap;

use crate::{Error, Result, io};

/// Flat, insertion-ordered key/value pairs read from one resource.
pub type Properties = IndexMap<String, String>;

const WHITESPACE: [char; 3] = [' ', '\t', '\u{000c}'];

/// Parse properties text. `source` names the resource in error messages.
pub fn parse_properties(source: &str, text: &str) -> Result<Properties> {
    let mut properties = Properties::new();
    let mut lines = split_lines(text).enumerate();

    while let Some((index, raw)) = lines.next() {
        let line = raw.trim_start_matches(WHITESPACE);
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let mut logical = String::from(line);
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(WHITESPACE)),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let parse_error = |message: String| Error::PropertiesParse {
            path: source.to_string(),
            line: index + 1,
            message,
        };
        let key = unescape(key).map_err(parse_error)?;
        let value = unescape(value).map_err(parse_error)?;
        properties.insert(key, value);
    }

    Ok(properties)
}

/// Load a properties file from the filesystem.
///
/// A missing or unreadable file is an [`Error::Io`] carrying the path.
pub fn load_file(path: &Path) -> Result<Properties> {
    let content = io::read_text(path)?;
    let properties = parse_properties(&path.display().to_string(), &content)?;
    tracing::debug!(path = %path.display(), keys = properties.len(), "Loaded properties file");
    Ok(properties)
}

fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.chars().rev().take_while(|c| *c == '\\').count();
    trailing % 2 == 1
}

fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut key_end = line.len();
    let mut explicit_separator = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                explicit_separator = true;
                break;
            }
            ' ' | '\t' | '\u{000c}' => {
                key_end = i;
                break;
            }
            _ => {}
        }
    }

    let key = &line[..key_end];
    let mut rest = &line[key_end..];
    if explicit_separator {
        rest = &rest[1..];
    }
    rest = rest.trim_start_matches(WHITESPACE);
    if !explicit_separator {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped.trim_start_matches(WHITESPACE);
        }
    }
    (key, rest)
}

fn unescape(text: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{000c}'),
            Some('u') => {
                let unit = code_unit(&mut chars)?;
                let units = if (0xD800..=0xDBFF).contains(&unit) {
                    let low = match (chars.next(), chars.next()) {
                        (Some('\\'), Some('u')) => code_unit(&mut chars)?,
                        _ => return Err(format!("unpaired surrogate \\u{unit:04X}")),
                    };
                    vec![unit, low]
                } else {
                    vec![unit]
                };
                for decoded in char::decode_utf16(units) {
                    match decoded {
                        Ok(ch) => out.push(ch),
                        Err(e) => return Err(format!("unpaired surrogate \\u{:04X}", e.unpaired_surrogate())),
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    Ok(out)
}

/// Read the four hex digits of a `\u` escape as one UTF-16 code unit.
fn code_unit(chars: &mut std::str::Chars<'_>) -> std::result::Result<u16, String> {
    let hex: String = chars.by_ref().take(4).collect();
    if hex.len() != 4 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("malformed \\u escape: \\u{hex}"));
    }
    u16::from_str_radix(&hex, 16).map_err(|e| format!("malformed \\u escape: \\u{hex} ({e})"))
}
