pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    lines
}

pub fn truncate(s: &str, max_len: usize) -> String {
    match max_len {
        0 => return String::new(),
        1 => return "…".to_string(),
        _ => {}
    }

    if s.char_indices().nth(max_len).is_none() {
        return s.to_string();
    }

    let cut = s
        .char_indices()
        .nth(max_len - 1)
        .map(|(idx, _)| idx)
        .unwrap_or(0);

    format!("{}…", &s[..cut])
}

/// Byte count in binary units, e.g. `512 B` or `1.5 KiB`.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KiB", "MiB", "GiB", "TiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}
