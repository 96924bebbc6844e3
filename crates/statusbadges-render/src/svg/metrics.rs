//! Text width estimates for 11px Verdana, the badge font.

/// Advance widths in pixels for printable ASCII, starting at `' '`.
const VERDANA_11: [f64; 95] = [
    3.87, 4.33, 5.05, 9.00, 6.99, 11.84, 7.99, 2.95, // space ! " # $ % & '
    4.99, 4.99, 6.99, 9.00, 4.00, 4.99, 4.00, 4.99, // ( ) * + , - . /
    6.99, 6.99, 6.99, 6.99, 6.99, 6.99, 6.99, 6.99, // 0-7
    6.99, 6.99, 4.99, 4.99, 9.00, 9.00, 9.00, 6.00, // 8 9 : ; < = > ?
    11.00, 7.52, 7.54, 7.68, 8.48, 6.96, 6.32, 8.53, // @ A-G
    8.27, 4.63, 5.00, 7.62, 6.12, 9.27, 8.23, 8.66, // H-O
    6.63, 8.66, 7.65, 7.52, 6.78, 8.05, 7.52, 10.88, // P-W
    7.54, 6.77, 7.54, 4.99, 4.99, 4.99, 9.00, 6.99, // X Y Z [ \ ] ^ _
    6.99, 6.61, 6.85, 5.73, 6.85, 6.55, 3.87, 6.85, // ` a-g
    6.96, 3.02, 3.79, 6.51, 3.02, 10.71, 6.96, 6.68, // h-o
    6.85, 6.85, 4.69, 5.73, 4.33, 6.96, 6.51, 8.98, // p-w
    6.51, 6.51, 5.78, 6.98, 4.99, 6.98, 9.00, // x y z { | } ~
];

/// Width used for characters outside the table, the width of `m`.
const WIDE_CHAR: f64 = 10.71;

/// Estimated rendered width of `text` in pixels.
pub fn text_width(text: &str) -> f64 {
    text.chars()
        .map(|c| match c as u32 {
            code @ 32..=126 => VERDANA_11[(code - 32) as usize],
            _ => WIDE_CHAR,
        })
        .sum()
}

/// Width to reserve for `text`: rounded up, then up again to an odd number
/// so the text centers on a whole pixel.
pub fn preferred_width(text: &str) -> u32 {
    round_up_to_odd(text_width(text).ceil() as u32)
}

fn round_up_to_odd(n: u32) -> u32 {
    if n % 2 == 0 { n + 1 } else { n }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(text_width(""), 0.0);
        assert_eq!(preferred_width(""), 1);
    }

    #[test]
    fn test_known_widths() {
        assert!((text_width("m") - 10.71).abs() < f64::EPSILON);
        assert!((text_width("0") - 6.99).abs() < f64::EPSILON);
        // 6.96 + 3.02 = 9.98 -> 10 -> 11
        assert_eq!(preferred_width("hi"), 11);
    }

    #[test]
    fn test_preferred_width_is_odd() {
        for text in ["a", "ab", "online", "listening to", "Foo and Bar", "🎏 glitch"] {
            assert_eq!(preferred_width(text) % 2, 1, "{text}");
        }
    }

    #[test]
    fn test_non_ascii_uses_wide_width() {
        assert!((text_width("é") - WIDE_CHAR).abs() < f64::EPSILON);
    }
}
