//! Request parameters shared by every badge endpoint.

use serde::Deserialize;

/// Query string of a badge request.
///
/// Every field is optional. Text overrides are taken verbatim, so an
/// explicitly empty `label` renders an empty label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BadgeParams {
    /// Overrides the label text.
    pub label: Option<String>,
    /// Overrides the message color.
    pub color: Option<String>,
    /// Overrides the label color.
    #[serde(rename = "labelColor")]
    pub label_color: Option<String>,
    /// Badge style name.
    pub style: Option<String>,
    /// Message used when nothing matches.
    pub fallback: Option<String>,
    /// `"true"` collapses idle and dnd into online.
    pub simple: Option<String>,
    /// `"true"` suppresses the brand logo.
    #[serde(rename = "hideLogo")]
    pub hide_logo: Option<String>,
}

impl BadgeParams {
    /// Build from raw query pairs in request order.
    ///
    /// The first value of a repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "label" => &mut params.label,
                "color" => &mut params.color,
                "labelColor" => &mut params.label_color,
                "style" => &mut params.style,
                "fallback" => &mut params.fallback,
                "simple" => &mut params.simple,
                "hideLogo" => &mut params.hide_logo,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        params
    }

    /// Whether `simple=true` was given.
    pub fn simple(&self) -> bool {
        is_true(&self.simple)
    }

    /// Whether `hideLogo=true` was given.
    pub fn hide_logo(&self) -> bool {
        is_true(&self.hide_logo)
    }
}

// Only the exact literal counts; `1`, `yes` and `TRUE` do not.
fn is_true(flag: &Option<String>) -> bool {
    flag.as_deref() == Some("true")
}
