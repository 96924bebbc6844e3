//! Badge color parsing: shields palette names, hex, and CSS colors.

/// Background used for the label when none resolves.
pub const DEFAULT_LABEL_COLOR: &str = "#555";
/// Background used for the message when none resolves.
pub const DEFAULT_MESSAGE_COLOR: &str = "#4c1";

fn palette(name: &str) -> Option<&'static str> {
    Some(match name {
        "brightgreen" | "success" => "#4c1",
        "green" => "#97ca00",
        "yellowgreen" => "#a4a61d",
        "yellow" => "#dfb317",
        "orange" | "important" => "#fe7d37",
        "red" | "critical" => "#e05d44",
        "blue" | "informational" => "#007ec6",
        "grey" | "gray" => "#555",
        "lightgrey" | "lightgray" | "inactive" => "#9f9f9f",
        _ => return None,
    })
}

fn is_hex(value: &str) -> bool {
    matches!(value.len(), 3 | 4 | 6 | 8) && value.chars().all(|c| c.is_ascii_hexdigit())
}

fn is_css_function(value: &str) -> bool {
    let Some((name, rest)) = value.split_once('(') else {
        return false;
    };
    let Some(args) = rest.strip_suffix(')') else {
        return false;
    };
    matches!(name, "rgb" | "rgba" | "hsl" | "hsla")
        && !args.trim().is_empty()
        && args
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '%' | ' ' | '/'))
}

/// Turn a user-supplied color into something safe to put in `fill`.
///
/// Returns `None` for anything unrecognized.
pub fn normalize(color: &str) -> Option<String> {
    let color = color.trim();
    if color.is_empty() {
        return None;
    }
    let lower = color.to_ascii_lowercase();
    if let Some(hex) = palette(&lower) {
        return Some(hex.to_string());
    }
    let bare = lower.strip_prefix('#').unwrap_or(&lower);
    if is_hex(bare) {
        return Some(format!("#{bare}"));
    }
    if lower.chars().all(|c| c.is_ascii_lowercase()) || is_css_function(&lower) {
        return Some(lower);
    }
    None
}

/// [`normalize`] with a fallback.
pub fn resolve(color: &str, default: &str) -> String {
    normalize(color).unwrap_or_else(|| default.to_string())
}

fn rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 | 4 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
            Some((digits.next()??, digits.next()??, digits.next()??))
        }
        6 | 8 => Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
        _ => None,
    }
}

/// Whether dark text reads better than white on `color`. Only hex colors
/// are judged; everything else counts as dark.
pub fn is_light(color: &str) -> bool {
    match rgb(color) {
        Some((r, g, b)) => {
            let brightness = (299.0 * r as f64 + 587.0 * g as f64 + 114.0 * b as f64) / 255_000.0;
            brightness >= 0.69
        }
        None => false,
    }
}

/// Escape text for use in element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_and_aliases() {
        assert_eq!(normalize("brightgreen").as_deref(), Some("#4c1"));
        assert_eq!(normalize("lightgray").as_deref(), Some("#9f9f9f"));
        assert_eq!(normalize("gray").as_deref(), Some("#555"));
        assert_eq!(normalize("Critical").as_deref(), Some("#e05d44"));
    }

    #[test]
    fn test_hex_with_and_without_hash() {
        assert_eq!(normalize("5865f2").as_deref(), Some("#5865f2"));
        assert_eq!(normalize("#1DB954").as_deref(), Some("#1db954"));
        assert_eq!(normalize("abc").as_deref(), Some("#abc"));
        assert_eq!(normalize("#12345").as_deref(), None);
    }

    #[test]
    fn test_css_passthrough() {
        assert_eq!(normalize("rebeccapurple").as_deref(), Some("rebeccapurple"));
        assert_eq!(normalize("rgb(0, 10, 20)").as_deref(), Some("rgb(0, 10, 20)"));
        assert_eq!(normalize("rgb(0);x").as_deref(), None);
        assert_eq!(normalize("\"/><script>").as_deref(), None);
        assert_eq!(normalize("").as_deref(), None);
    }

    #[test]
    fn test_resolve_default() {
        assert_eq!(resolve("nope!", DEFAULT_MESSAGE_COLOR), "#4c1");
    }

    #[test]
    fn test_is_light() {
        assert!(is_light("#fff"));
        assert!(!is_light("#dfb317"));
        assert!(!is_light("#555"));
        assert!(!is_light("#007ec6"));
        assert!(is_light("#ffffff"));
        assert!(!is_light("white"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a & <b> \"c\" 'd'"), "a &amp; &lt;b&gt; &quot;c&quot; &apos;d&apos;");
    }
}
