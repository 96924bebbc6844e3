//! Shields-compatible badge drawing.
//!
//! Geometry is kept to whole pixels, with text coordinates in tenths of a
//! pixel under `transform="scale(.1)"`. The logo injector relies on that
//! layout for the flat, flat-square and plastic styles.

use super::BadgeRenderer;
use super::color::{self, DEFAULT_LABEL_COLOR, DEFAULT_MESSAGE_COLOR, escape_xml};
use super::metrics::preferred_width;
use crate::badge::{BadgeSpec, BadgeStyle};

const HORIZ_PADDING: u32 = 5;
const FONT_FAMILY: &str = "Verdana,Geneva,DejaVu Sans,sans-serif";
const SOCIAL_FONT_FAMILY: &str = "Helvetica Neue,Helvetica,Arial,sans-serif";

/// Renders all five badge styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShieldsRenderer;

impl ShieldsRenderer {
    /// Create a renderer.
    pub fn new() -> Self {
        Self
    }
}

impl BadgeRenderer for ShieldsRenderer {
    fn render(&self, spec: &BadgeSpec) -> String {
        match spec.style {
            BadgeStyle::Flat => render_flat_like(spec, &FLAT),
            BadgeStyle::FlatSquare => render_flat_like(spec, &FLAT_SQUARE),
            BadgeStyle::Plastic => render_flat_like(spec, &PLASTIC),
            BadgeStyle::ForTheBadge => render_for_the_badge(spec),
            BadgeStyle::Social => render_social(spec),
        }
    }
}

/// One half of a badge, measured.
struct Section {
    /// Escaped text.
    text: String,
    /// Background width in pixels.
    width: u32,
    /// Text length in tenths.
    text_length: u32,
    /// Text center in tenths, relative to the section start.
    center: u32,
}

impl Section {
    fn measure(raw: &str, padding: u32) -> Self {
        let text_width = preferred_width(raw);
        let width = text_width + 2 * padding;
        Self {
            text: escape_xml(raw),
            width,
            text_length: text_width * 10,
            center: width * 5,
        }
    }
}

/// The differences between the three rounded/square variants.
struct FlatVariant {
    height: u32,
    radius: Option<u32>,
    gradient: Option<&'static str>,
    shadow_y: Option<u32>,
    text_y: u32,
}

const FLAT: FlatVariant = FlatVariant {
    height: 20,
    radius: Some(3),
    gradient: Some(
        r##"<stop offset="0" stop-color="#bbb" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/>"##,
    ),
    shadow_y: Some(150),
    text_y: 140,
};

const FLAT_SQUARE: FlatVariant = FlatVariant {
    height: 20,
    radius: None,
    gradient: None,
    shadow_y: None,
    text_y: 140,
};

const PLASTIC: FlatVariant = FlatVariant {
    height: 18,
    radius: Some(4),
    gradient: Some(
        r##"<stop offset="0" stop-color="#fff" stop-opacity=".7"/><stop offset=".1" stop-color="#aaa" stop-opacity=".1"/><stop offset=".9" stop-color="#000" stop-opacity=".3"/><stop offset="1" stop-color="#000" stop-opacity=".5"/>"##,
    ),
    shadow_y: Some(140),
    text_y: 130,
};

fn aria_label(label: &str, message: &str) -> String {
    if label.is_empty() {
        escape_xml(message)
    } else {
        escape_xml(&format!("{label}: {message}"))
    }
}

fn svg_open(out: &mut String, width: u32, height: u32, title: &str) {
    out.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{width}" height="{height}" role="img" aria-label="{title}"><title>{title}</title>"#
    ));
}

fn text_colors(background: &str) -> (&'static str, &'static str) {
    if color::is_light(background) {
        ("#333", "#ccc")
    } else {
        ("#fff", "#010101")
    }
}

fn write_text(out: &mut String, section: &Section, offset: u32, variant: &FlatVariant, background: &str) {
    let x = offset * 10 + section.center;
    let (fill, shadow) = text_colors(background);
    if let Some(shadow_y) = variant.shadow_y {
        out.push_str(&format!(
            r#"<text aria-hidden="true" x="{x}" y="{shadow_y}" fill="{shadow}" fill-opacity=".3" transform="scale(.1)" textLength="{len}">{text}</text>"#,
            len = section.text_length,
            text = section.text,
        ));
    }
    out.push_str(&format!(
        r#"<text x="{x}" y="{y}" transform="scale(.1)" fill="{fill}" textLength="{len}">{text}</text>"#,
        y = variant.text_y,
        len = section.text_length,
        text = section.text,
    ));
}

fn render_flat_like(spec: &BadgeSpec, variant: &FlatVariant) -> String {
    let label = Section::measure(&spec.label, HORIZ_PADDING);
    let message = Section::measure(&spec.message, HORIZ_PADDING);
    let label_color = color::resolve(&spec.label_color, DEFAULT_LABEL_COLOR);
    let message_color = color::resolve(&spec.message_color, DEFAULT_MESSAGE_COLOR);
    let width = label.width + message.width;
    let height = variant.height;

    let mut out = String::with_capacity(1024);
    svg_open(&mut out, width, height, &aria_label(&spec.label, &spec.message));

    if let Some(stops) = variant.gradient {
        out.push_str(&format!(r#"<linearGradient id="s" x2="0" y2="100%">{stops}</linearGradient>"#));
    }
    match variant.radius {
        Some(rx) => {
            out.push_str(&format!(
                r##"<clipPath id="r"><rect width="{width}" height="{height}" rx="{rx}" fill="#fff"/></clipPath><g clip-path="url(#r)">"##
            ));
        }
        None => out.push_str(r#"<g shape-rendering="crispEdges">"#),
    }
    out.push_str(&format!(
        r#"<rect width="{lw}" height="{height}" fill="{label_color}"/><rect x="{lw}" width="{mw}" height="{height}" fill="{message_color}"/>"#,
        lw = label.width,
        mw = message.width,
    ));
    if variant.gradient.is_some() {
        out.push_str(&format!(r#"<rect width="{width}" height="{height}" fill="url(#s)"/>"#));
    }
    out.push_str("</g>");

    out.push_str(&format!(
        r#"<g fill="{fill}" text-anchor="middle" font-family="{FONT_FAMILY}" text-rendering="geometricPrecision" font-size="110">"#,
        fill = "#fff",
    ));
    write_text(&mut out, &label, 0, variant, &label_color);
    write_text(&mut out, &message, label.width, variant, &message_color);
    out.push_str("</g></svg>");
    out
}

fn render_for_the_badge(spec: &BadgeSpec) -> String {
    let label_raw = spec.label.to_uppercase();
    let message_raw = spec.message.to_uppercase();
    let label = Section::measure(&label_raw, 12);
    let message = Section::measure(&message_raw, 12);
    let label_color = color::resolve(&spec.label_color, DEFAULT_LABEL_COLOR);
    let message_color = color::resolve(&spec.message_color, DEFAULT_MESSAGE_COLOR);
    let width = label.width + message.width;

    let mut out = String::with_capacity(1024);
    svg_open(&mut out, width, 28, &aria_label(&label_raw, &message_raw));
    out.push_str(&format!(
        r#"<g shape-rendering="crispEdges"><rect width="{lw}" height="28" fill="{label_color}"/><rect x="{lw}" width="{mw}" height="28" fill="{message_color}"/></g>"#,
        lw = label.width,
        mw = message.width,
    ));
    out.push_str(&format!(
        r#"<g fill="{fill}" text-anchor="middle" font-family="{FONT_FAMILY}" text-rendering="geometricPrecision" font-size="100">"#,
        fill = "#fff",
    ));
    let (label_fill, _) = text_colors(&label_color);
    out.push_str(&format!(
        r#"<text transform="scale(.1)" x="{x}" y="175" textLength="{len}" fill="{label_fill}">{text}</text>"#,
        x = label.center,
        len = label.text_length,
        text = label.text,
    ));
    let (message_fill, _) = text_colors(&message_color);
    out.push_str(&format!(
        r#"<text transform="scale(.1)" x="{x}" y="175" textLength="{len}" fill="{message_fill}" font-weight="bold">{text}</text>"#,
        x = label.width * 10 + message.center,
        len = message.text_length,
        text = message.text,
    ));
    out.push_str("</g></svg>");
    out
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_social(spec: &BadgeSpec) -> String {
    let label_raw = capitalize(&spec.label);
    let label = Section::measure(&label_raw, HORIZ_PADDING);
    let message = Section::measure(&spec.message, HORIZ_PADDING);
    // The message bubble starts after a 6px arrow gap.
    let message_x = label.width + 6;
    let width = message_x + message.width + 1;

    let mut out = String::with_capacity(1536);
    svg_open(&mut out, width, 20, &aria_label(&label_raw, &spec.message));
    out.push_str(
        r##"<style>a:hover #llink{fill:url(#b);stroke:#ccc}a:hover #rlink{fill:#4183c4}</style><linearGradient id="a" x2="0" y2="100%"><stop offset="0" stop-color="#fcfcfc" stop-opacity="0"/><stop offset="1" stop-opacity=".1"/></linearGradient><linearGradient id="b" x2="0" y2="100%"><stop offset="0" stop-color="#ccc" stop-opacity=".1"/><stop offset="1" stop-opacity=".1"/></linearGradient>"##,
    );
    out.push_str(&format!(
        r##"<g stroke="#d5d5d5"><rect stroke="none" fill="#fcfcfc" x="0.5" y="0.5" width="{lw}" height="19" rx="2"/><rect x="{mx}.5" y="0.5" width="{mw}" height="19" rx="2" fill="#fafafa"/><rect x="{gx}" y="7.5" width="0.5" height="5" stroke="#fafafa"/><path d="M{mx}.5 6.5 l-3 3v1 l3 3" fill="#fafafa"/></g>"##,
        lw = label.width - 1,
        mx = message_x,
        mw = message.width,
        gx = message_x,
    ));
    out.push_str(&format!(
        r##"<g aria-hidden="true" fill="#333" text-anchor="middle" font-family="{SOCIAL_FONT_FAMILY}" text-rendering="geometricPrecision" font-weight="700" font-size="110px" line-height="14px"><rect id="llink" stroke="#d5d5d5" fill="url(#a)" x=".5" y=".5" width="{lw}" height="19" rx="2"/>"##,
        lw = label.width - 1,
    ));
    let label_x = label.center;
    let message_center = message_x * 10 + message.center;
    out.push_str(&format!(
        r##"<text aria-hidden="true" x="{label_x}" y="150" fill="#fff" transform="scale(.1)" textLength="{llen}">{ltext}</text><text x="{label_x}" y="140" transform="scale(.1)" textLength="{llen}">{ltext}</text><text aria-hidden="true" x="{message_center}" y="150" fill="#fff" transform="scale(.1)" textLength="{mlen}">{mtext}</text><a id="rlink"><text x="{message_center}" y="140" transform="scale(.1)" textLength="{mlen}">{mtext}</text></a>"##,
        llen = label.text_length,
        ltext = label.text,
        mlen = message.text_length,
        mtext = message.text,
    ));
    out.push_str("</g></svg>");
    out
}
