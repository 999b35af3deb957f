//! Display rules for the archive's tag micro-format.
//!
//! The archive owns two structural patterns: a level prefix (`L<digits>-`)
//! that is stripped before display and internal codes (a single `I` or `C`
//! followed by digits only) that are never displayed.

/// Normalizes a raw tag into its display form.
///
/// Trims whitespace and strips level prefixes until none is left, so the
/// result is a fixpoint: normalizing a display form returns it unchanged.
/// Returns `None` for blank input and for internal codes, which are
/// suppressed even if a real tag happens to collide with the pattern.
#[must_use]
pub fn normalize_tag_display(tag: &str) -> Option<&str> {
    let mut cleaned = tag.trim();
    while let Some(rest) = strip_level_prefix(cleaned) {
        cleaned = rest.trim();
    }
    if cleaned.is_empty() || is_internal_code(cleaned) {
        None
    } else {
        Some(cleaned)
    }
}

/// Display forms of a result's tags, with suppressed tags omitted.
#[must_use]
pub fn display_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .filter_map(|tag| normalize_tag_display(tag))
        .map(ToOwned::to_owned)
        .collect()
}

/// Appends a tag to a comma-separated tag list.
#[must_use]
pub fn append_to_tag_list(existing: &str, tag: &str) -> String {
    let existing = existing.trim();
    if existing.is_empty() {
        tag.to_string()
    } else {
        format!("{existing}, {tag}")
    }
}

fn strip_level_prefix(tag: &str) -> Option<&str> {
    let rest = tag.strip_prefix(['L', 'l'])?;
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix('-')
}

fn is_internal_code(tag: &str) -> bool {
    let Some(rest) = tag.strip_prefix(['I', 'i', 'C', 'c']) else {
        return false;
    };
    !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_level_prefixes() {
        assert_eq!(normalize_tag_display("L3-graphs"), Some("graphs"));
        assert_eq!(normalize_tag_display("l12-dp"), Some("dp"));
        assert_eq!(normalize_tag_display("L1-L2-trees"), Some("trees"));
    }

    #[test]
    fn keep_tags_that_only_resemble_level_prefixes() {
        assert_eq!(normalize_tag_display("L-dash"), Some("L-dash"));
        assert_eq!(normalize_tag_display("L12"), Some("L12"));
        assert_eq!(normalize_tag_display("level-1"), Some("level-1"));
    }

    #[test]
    fn suppress_internal_codes() {
        assert_eq!(normalize_tag_display("I42"), None);
        assert_eq!(normalize_tag_display("i0"), None);
        assert_eq!(normalize_tag_display("c7"), None);
        assert_eq!(normalize_tag_display("L3-I42"), None);
    }

    #[test]
    fn keep_tags_that_only_resemble_internal_codes() {
        assert_eq!(normalize_tag_display("I"), Some("I"));
        assert_eq!(normalize_tag_display("I4x"), Some("I4x"));
        assert_eq!(normalize_tag_display("IC12"), Some("IC12"));
    }

    #[test]
    fn trim_whitespace_and_reject_blank_input() {
        assert_eq!(normalize_tag_display("  two sum  "), Some("two sum"));
        assert_eq!(normalize_tag_display(""), None);
        assert_eq!(normalize_tag_display("   "), None);
    }

    #[test]
    fn normalization_is_a_fixpoint() {
        let inputs = [
            "L3-graphs",
            "l12-dp",
            "L1-L2-trees",
            "L2-  spaced  ",
            "  two sum  ",
            "I42",
            "",
            "δέντρα",
        ];
        for raw in inputs {
            let once = normalize_tag_display(raw);
            assert_eq!(normalize_tag_display(once.unwrap_or("")), once, "{raw:?}");
        }
    }

    #[test]
    fn append_tags_to_list() {
        assert_eq!(append_to_tag_list("dp", "graphs"), "dp, graphs");
        assert_eq!(append_to_tag_list("", "graphs"), "graphs");
        assert_eq!(append_to_tag_list("   ", "graphs"), "graphs");
    }

    #[test]
    fn badge_lists_skip_suppressed_tags() {
        let tags = vec![
            "L1-math".to_string(),
            "I3".to_string(),
            "geometry".to_string(),
        ];
        assert_eq!(display_tags(&tags), vec!["math", "geometry"]);
    }
}
