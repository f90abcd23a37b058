// Reader for Java-style `.properties` locale bundles

use std::collections::HashMap;

/// Parsed key/value pairs of a properties file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    pub fn parse(text: &str) -> Self {
        let mut values = HashMap::new();

        for line in logical_lines(text) {
            let (key, value) = split_entry(&line);
            if !key.is_empty() {
                values.insert(unescape(key), unescape(value));
            }
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Join continuation lines and drop blanks and comments
fn logical_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut pending: Option<String> = None;

    for raw in text.lines() {
        let trimmed = raw.trim_start();

        let mut current = match pending.take() {
            Some(mut prefix) => {
                prefix.push_str(trimmed);
                prefix
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                trimmed.to_string()
            }
        };

        if ends_with_continuation(&current) {
            current.pop();
            pending = Some(current);
        } else {
            lines.push(current);
        }
    }

    if let Some(rest) = pending {
        lines.push(rest);
    }

    lines
}

/// An odd number of trailing backslashes continues the line
fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Split at the first unescaped `=`, `:` or whitespace
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => return (&line[..i], line[i + 1..].trim_start()),
            c if c.is_whitespace() => {
                let rest = line[i..].trim_start();
                let rest = rest
                    .strip_prefix('=')
                    .or_else(|| rest.strip_prefix(':'))
                    .unwrap_or(rest);
                return (&line[..i], rest.trim_start());
            }
            _ => {}
        }
    }

    (line, "")
}

fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\u{c}'),
            Some('u') => {
                let hex: String = chars.by_ref().take(4).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(decoded) => out.push(decoded),
                    None => {
                        out.push_str("\\u");
                        out.push_str(&hex);
                    }
                }
            }
            Some(other) => out.push(other),
            None => {}
        }
    }

    out
}
