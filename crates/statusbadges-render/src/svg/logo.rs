//! Logo injection into rendered badges.
//!
//! The renderer has no logo slot, so the glyph is spliced into finished
//! markup and the surrounding geometry is widened to make room. This only
//! holds for the flat, flat-square and plastic layouts; callers check
//! [`BadgeStyle::supports_logo`](crate::BadgeStyle::supports_logo) first.

use crate::error::InjectError;

/// Pixels added to each widened element: a 14px glyph plus spacing.
pub const LOGO_WIDTH_DELTA: u64 = 17;
/// The same shift in the tenth-pixel text coordinate space.
pub const LOGO_TEXT_SHIFT: u64 = 170;

const WIDTH_ATTR: &str = r#"width=""#;
const CLIPPED_LABEL_RECT: &str = r#")"><rect width=""#;
const LABEL_RECT: &str = r#""><rect width=""#;
const X_ATTR: &str = r#" x=""#;

/// Insert `logo` (base64 SVG) in front of the label and widen the badge.
///
/// Steps, each applied to the output of the previous one:
///
/// 1. an `<image>` carrying the logo goes before the first `<text`
/// 2. the first `width="N"` is the badge width; every `width="N"` grows by 17
/// 3. the label rectangle width `G` is read from the clip group, or from the
///    first `"><rect` for flat-square; every `="G"` grows by 17
/// 4. every text anchor `x` grows by 170
///
/// Every structural pattern must be present; a badge that does not match
/// is rejected rather than returned half-adjusted.
pub fn inject_logo(svg: &str, logo: &str) -> Result<String, InjectError> {
    if !svg.contains("<text") {
        return Err(InjectError::MissingTextElement);
    }
    // Read before the glyph is inserted so its own width is never picked up.
    let full_width = number_after(svg, WIDTH_ATTR).ok_or(InjectError::MissingWidth)?;

    let svg = svg.replacen(
        "<text",
        &format!(
            r#"<image x="5" y="3" width="14" height="14" xlink:href="data:image/svg+xml;base64,{logo}"/><text"#
        ),
        1,
    );

    let svg = svg.replace(
        &format!(r#"width="{full_width}""#),
        &format!(r#"width="{}""#, full_width + LOGO_WIDTH_DELTA),
    );

    let label_width = number_after(&svg, CLIPPED_LABEL_RECT)
        .or_else(|| number_after(&svg, LABEL_RECT))
        .ok_or(InjectError::MissingLabelRect)?;
    let svg = svg.replace(
        &format!(r#"="{label_width}""#),
        &format!(r#"="{}""#, label_width + LOGO_WIDTH_DELTA),
    );

    Ok(shift_text_anchors(&svg, LOGO_TEXT_SHIFT))
}

/// Leading digits of `rest` closed by `"`, with their byte length.
fn quoted_number(rest: &str) -> Option<(u64, usize)> {
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || rest.as_bytes().get(digits) != Some(&b'"') {
        return None;
    }
    rest[..digits].parse().ok().map(|n| (n, digits))
}

/// The number in the first `{prefix}N"` occurrence.
fn number_after(haystack: &str, prefix: &str) -> Option<u64> {
    haystack
        .match_indices(prefix)
        .find_map(|(at, _)| quoted_number(&haystack[at + prefix.len()..]))
        .map(|(n, _)| n)
}

/// Add `shift` to every `x="N"` directly following a quote or a `<text` tag
/// name. Other elements' `x` (rects, the logo image) are left alone.
fn shift_text_anchors(svg: &str, shift: u64) -> String {
    let mut out = String::with_capacity(svg.len() + 64);
    let mut copied = 0;
    for (at, _) in svg.match_indices(X_ATTR) {
        let before = &svg[..at];
        if !(before.ends_with('"') || before.ends_with("xt")) {
            continue;
        }
        let value_start = at + X_ATTR.len();
        let Some((x, len)) = quoted_number(&svg[value_start..]) else {
            continue;
        };
        out.push_str(&svg[copied..value_start]);
        out.push_str(&(x + shift).to_string());
        copied = value_start + len;
    }
    out.push_str(&svg[copied..]);
    out
}
