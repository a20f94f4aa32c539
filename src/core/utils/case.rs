//! Name case conversions used to match documented titles against tags.

/// Convert a component title to a kebab-case tag name.
///
/// Word boundaries are a lowercase letter or digit followed by an uppercase
/// letter, and the last capital of an acronym run when it starts a new word:
/// - `AutoComplete` -> `auto-complete`
/// - `QRCode` -> `qr-code`
/// - `Input Number` -> `input-number`
pub fn to_kebab_case(text: &str) -> String {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '-' || c == '_' || c.is_whitespace() {
            push_separator(&mut out);
            continue;
        }

        if c.is_uppercase() {
            let prev = i.checked_sub(1).map(|j| chars[j]);
            let next = chars.get(i + 1).copied();
            let boundary = match prev {
                Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
                Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
                _ => false,
            };
            if boundary {
                push_separator(&mut out);
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out.trim_end_matches('-').to_string()
}

fn push_separator(out: &mut String) {
    if !out.is_empty() && !out.ends_with('-') {
        out.push('-');
    }
}

/// Convert a kebab-case tag to UpperCamelCase: `menu-item-group` -> `MenuItemGroup`.
pub fn to_upper_camel_case(tag: &str) -> String {
    tag.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Uppercase the first character only: `update:value` -> `Update:value`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
