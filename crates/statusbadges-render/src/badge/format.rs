//! Text helpers for badge messages.

/// Join items as an English list: `A`, `A and B`, `A, B and C`.
pub fn conjunction<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Remove the first occurrence of `pattern`.
pub fn strip_first(text: &str, pattern: &str) -> String {
    text.replacen(pattern, "", 1)
}

/// Remove the span from the first `(` through the last `)` after it.
///
/// `Song (feat. X) (Remix)` becomes `Song `. No trimming is applied.
pub fn strip_parenthesized(text: &str) -> String {
    let Some(open) = text.find('(') else {
        return text.to_string();
    };
    match text[open..].rfind(')') {
        Some(close) => {
            let end = open + close + 1;
            format!("{}{}", &text[..open], &text[end..])
        }
        None => text.to_string(),
    }
}

const WORKSPACE_MARKERS: [&str; 2] = ["Workspace: ", " (Workspace)"];

/// Clean an editor workspace annotation out of a `state` string.
///
/// Markers are removed in a single left-to-right pass, so text left behind
/// by one removal is never matched again.
pub fn strip_workspace(state: &str) -> String {
    let mut out = String::with_capacity(state.len());
    let mut rest = state;
    while let Some(c) = rest.chars().next() {
        match WORKSPACE_MARKERS.iter().find(|m| rest.starts_with(**m)) {
            Some(marker) => rest = &rest[marker.len()..],
            None => {
                out.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }
    out.replacen("Glitch:", "🎏", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conjunction() {
        let none: [&str; 0] = [];
        assert_eq!(conjunction(&none), "");
        assert_eq!(conjunction(&["Foo"]), "Foo");
        assert_eq!(conjunction(&["Foo", "Bar"]), "Foo and Bar");
        assert_eq!(conjunction(&["A", "B", "C"]), "A, B and C");
        assert_eq!(conjunction(&["A", "B", "C", "D"]), "A, B, C and D");
    }

    #[test]
    fn test_strip_first_only_once() {
        assert_eq!(strip_first("Editing Editing main.rs", "Editing "), "Editing main.rs");
        assert_eq!(strip_first("main.rs", "Editing "), "main.rs");
    }

    #[test]
    fn test_strip_parenthesized() {
        assert_eq!(strip_parenthesized("Song (feat. X)"), "Song ");
        assert_eq!(strip_parenthesized("Song (a) mid (b) end"), "Song  end");
        assert_eq!(strip_parenthesized("Song (unclosed"), "Song (unclosed");
        assert_eq!(strip_parenthesized("Song ) (x"), "Song ) (x");
        assert_eq!(strip_parenthesized("Plain"), "Plain");
    }

    #[test]
    fn test_strip_workspace() {
        assert_eq!(strip_workspace("Workspace: statusbadges"), "statusbadges");
        assert_eq!(strip_workspace("statusbadges (Workspace)"), "statusbadges");
        assert_eq!(strip_workspace("Glitch:project"), "🎏project");
        assert_eq!(strip_workspace("Glitch:a Glitch:b"), "🎏a Glitch:b");
        assert_eq!(strip_workspace(" (WorkWorkspace: space)"), " (Workspace)");
        assert_eq!(strip_workspace("a (Workspace) Workspace: b"), "a b");
    }
}
