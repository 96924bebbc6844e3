//! Maps a presence record and request parameters to a [`BadgeSpec`].

use statusbadges_core::config::BadgesConfig;
use statusbadges_entity::{Activity, ActivityType, PresenceRecord, PresenceStatus};

use super::format::{conjunction, strip_first, strip_parenthesized, strip_workspace};
use super::{
    BadgeKind, BadgeParams, BadgeSpec, BadgeStyle, CRUNCHYROLL_NAME, INTELLIJ_IDLE_STATE,
    INTELLIJ_NAME, SPOTIFY_NAME, VSCODE_NAME,
};

const EDITING_PREFIX: &str = "Editing ";

/// Builds badge specs. Holds only configuration, so composing is pure.
#[derive(Debug, Clone)]
pub struct BadgeComposer {
    fallback_message: String,
    default_label_color: String,
}

impl BadgeComposer {
    /// Create a composer using the configured defaults.
    pub fn new(config: &BadgesConfig) -> Self {
        Self {
            fallback_message: config.fallback_message.clone(),
            default_label_color: config.default_label_color.clone(),
        }
    }

    /// Compose the badge for `kind`. A missing record is treated as offline
    /// with no activities.
    pub fn compose(
        &self,
        kind: BadgeKind,
        record: Option<&PresenceRecord>,
        params: &BadgeParams,
    ) -> BadgeSpec {
        let activities = record.map(|r| r.activities.as_slice()).unwrap_or_default();

        let (message, computed_color) = match kind {
            BadgeKind::Status => {
                let raw = record.map(|r| r.status).unwrap_or_default();
                let status = if params.simple() { raw.simplified() } else { raw };
                (status.as_str().to_string(), status_color(status))
            }
            BadgeKind::Playing => {
                let names: Vec<&str> = activities
                    .iter()
                    .filter(|a| {
                        a.kind == ActivityType::Playing
                            && a.name != VSCODE_NAME
                            && a.name != INTELLIJ_NAME
                    })
                    .map(|a| a.name.as_str())
                    .collect();
                let joined = conjunction(&names);
                let message = if joined.is_empty() {
                    match params.fallback.as_deref() {
                        Some(fallback) if !fallback.is_empty() => fallback.to_string(),
                        _ => self.fallback_message.clone(),
                    }
                } else {
                    joined
                };
                (message, kind_color(kind))
            }
            _ => {
                let message = activity_message(kind, activities).unwrap_or_else(|| {
                    params
                        .fallback
                        .clone()
                        .unwrap_or_else(|| self.fallback_message.clone())
                });
                (message, kind_color(kind))
            }
        };

        BadgeSpec {
            label: params
                .label
                .clone()
                .unwrap_or_else(|| kind.default_label().to_string()),
            message,
            label_color: params
                .label_color
                .clone()
                .unwrap_or_else(|| self.default_label_color.clone()),
            message_color: params.color.clone().unwrap_or(computed_color),
            style: BadgeStyle::resolve(params.style.as_deref()),
        }
    }

    /// Whether the rendered badge should get a logo injected.
    pub fn wants_logo(kind: BadgeKind, spec: &BadgeSpec, params: &BadgeParams) -> bool {
        kind.has_logo() && spec.style.supports_logo() && !params.hide_logo()
    }
}

impl Default for BadgeComposer {
    fn default() -> Self {
        Self::new(&BadgesConfig::default())
    }
}

fn status_color(status: PresenceStatus) -> String {
    match status {
        PresenceStatus::Online => "brightgreen",
        PresenceStatus::Idle => "yellow",
        PresenceStatus::DoNotDisturb => "red",
        PresenceStatus::Offline => "lightgray",
    }
    .to_string()
}

fn kind_color(kind: BadgeKind) -> String {
    kind.default_color().unwrap_or("lightgray").to_string()
}

/// Message for the single-activity kinds, or `None` when nothing matches.
fn activity_message(kind: BadgeKind, activities: &[Activity]) -> Option<String> {
    match kind {
        BadgeKind::Vscode => activities
            .iter()
            .filter(|a| a.name == VSCODE_NAME)
            .find_map(|a| Some((a.details()?, a.state()?)))
            .map(|(details, state)| {
                format!(
                    "{} in {}",
                    strip_first(details, EDITING_PREFIX),
                    strip_workspace(state)
                )
            }),
        BadgeKind::Intellij => activities
            .iter()
            .filter(|a| a.name == INTELLIJ_NAME)
            .find_map(|a| {
                let state = a.state().filter(|s| *s != INTELLIJ_IDLE_STATE)?;
                Some((a.details()?, state))
            })
            .map(|(details, state)| {
                format!("{} in {}", strip_first(details, EDITING_PREFIX), state)
            }),
        BadgeKind::Spotify => activities
            .iter()
            .filter(|a| a.kind == ActivityType::Listening && a.name == SPOTIFY_NAME)
            .find_map(|a| Some((a.details()?, a.state()?)))
            .map(|(details, state)| {
                let artists: Vec<&str> = state.split("; ").collect();
                format!(
                    "{} by {}",
                    strip_parenthesized(details),
                    conjunction(&artists)
                )
            }),
        BadgeKind::Crunchyroll => activities
            .iter()
            .filter(|a| a.kind == ActivityType::Watching && a.name == CRUNCHYROLL_NAME)
            .find_map(Activity::details)
            .map(str::to_string),
        BadgeKind::Status | BadgeKind::Playing => None,
    }
}
