use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// One token of a rendered line: either a visible grapheme cluster or an
/// ANSI escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Cluster(String),
    Escape(String),
}

impl Segment {
    pub fn as_str(&self) -> &str {
        match self {
            Segment::Cluster(text) | Segment::Escape(text) => text,
        }
    }

    /// Display columns this token occupies. Escape sequences occupy none.
    pub fn width(&self) -> usize {
        match self {
            Segment::Cluster(text) => cluster_width(text),
            Segment::Escape(_) => 0,
        }
    }

    pub fn is_escape(&self) -> bool {
        matches!(self, Segment::Escape(_))
    }
}

/// Compute the display width of a string after stripping ANSI escapes.
///
/// CSI and OSC sequences are removed first, then widths are summed per
/// extended grapheme cluster so combining marks, East-Asian wide characters
/// and multi-codepoint emoji all resolve to their on-screen column counts.
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean = String::from_utf8_lossy(&clean);
    clean.graphemes(true).map(cluster_width).sum()
}

/// Longest prefix of `text` whose display width fits in `max` columns.
///
/// Escape-blind; styled text goes through [`crate::ansi`] instead.
pub fn truncate_to_width(text: &str, max: usize) -> &str {
    let mut used = 0;
    let mut end = 0;
    for (idx, cluster) in text.grapheme_indices(true) {
        let width = cluster_width(cluster);
        if used + width > max {
            break;
        }
        used += width;
        end = idx + cluster.len();
    }
    &text[..end]
}

/// Width of a single extended grapheme cluster.
///
/// Pure combining marks, default-ignorable code points and controls are
/// zero-width; recognized emoji clusters occupy two columns; otherwise the
/// first printing code point decides via the Unicode East Asian Width tables.
pub(crate) fn cluster_width(cluster: &str) -> usize {
    if cluster.chars().all(is_zero_width) {
        return 0;
    }
    if is_emoji_cluster(cluster) {
        return 2;
    }
    for ch in cluster.chars() {
        match ch.width() {
            Some(0) | None => continue,
            Some(width) => return width.min(2),
        }
    }
    0
}

fn is_zero_width(ch: char) -> bool {
    matches!(ch.width(), Some(0) | None)
}

/// Conservative RGI-emoji recognition: ZWJ sequences, explicit emoji
/// presentation, skin-tone modifiers, regional-indicator flags, and the
/// dedicated emoji blocks.
fn is_emoji_cluster(cluster: &str) -> bool {
    if cluster.contains('\u{200d}') || cluster.contains('\u{fe0f}') {
        return true;
    }
    if cluster
        .chars()
        .any(|ch| matches!(ch, '\u{1f3fb}'..='\u{1f3ff}'))
    {
        return true;
    }
    match cluster.chars().next() {
        Some(first) => matches!(first, '\u{1f1e6}'..='\u{1f1ff}' | '\u{1f300}'..='\u{1faff}'),
        None => false,
    }
}

/// Tokenize `text` into escape-sequence and grapheme-cluster segments.
///
/// Every escape sequence becomes its own token, every visible cluster its own
/// token; the truncate/pad machinery walks this stream.
pub fn segments(text: &str) -> Vec<Segment> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(pos) = rest.find('\u{1b}') {
        push_clusters(&rest[..pos], &mut out);
        let (escape, remainder) = split_escape(&rest[pos..]);
        out.push(Segment::Escape(escape.to_string()));
        rest = remainder;
    }
    push_clusters(rest, &mut out);
    out
}

fn push_clusters(text: &str, out: &mut Vec<Segment>) {
    for cluster in text.graphemes(true) {
        out.push(Segment::Cluster(cluster.to_string()));
    }
}

/// Split one escape sequence off the front of `text`, which starts with ESC.
///
/// An unterminated sequence extends to the end of the text so scanning always
/// terminates.
fn split_escape(text: &str) -> (&str, &str) {
    let mut iter = text.char_indices();
    let _esc = iter.next();
    match iter.next() {
        // CSI: parameters and intermediates until a final byte in 0x40..=0x7e
        Some((_, '[')) => {
            for (idx, ch) in iter {
                if ('\u{40}'..='\u{7e}').contains(&ch) {
                    return text.split_at(idx + ch.len_utf8());
                }
            }
            (text, "")
        }
        // OSC: terminated by BEL, ESC \ or the C1 string terminator
        Some((_, ']')) => {
            let mut prev_was_esc = false;
            for (idx, ch) in iter {
                match ch {
                    '\u{7}' | '\u{9c}' => return text.split_at(idx + ch.len_utf8()),
                    '\\' if prev_was_esc => return text.split_at(idx + 1),
                    _ => {}
                }
                prev_was_esc = ch == '\u{1b}';
            }
            (text, "")
        }
        // Two-character forms such as DEC save/restore (ESC 7 / ESC 8)
        Some((idx, ch)) => text.split_at(idx + ch.len_utf8()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width(""), 0);
    }

    #[test]
    fn escapes_are_invisible() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(display_width("\x1b]0;title\x07body"), 4);
    }

    #[test]
    fn east_asian_wide() {
        assert_eq!(display_width("你好"), 4);
        assert_eq!(display_width("ｱ你"), 3);
    }

    #[test]
    fn combining_marks_collapse() {
        assert_eq!(display_width("a\u{300}"), 1);
        assert_eq!(display_width("\u{300}\u{301}"), 0);
    }

    #[test]
    fn emoji_clusters_are_wide() {
        assert_eq!(display_width("👍"), 2);
        assert_eq!(display_width("👍🏽"), 2);
        assert_eq!(display_width("👨\u{200d}👩\u{200d}👧\u{200d}👦"), 2);
        assert_eq!(display_width("🇩🇪"), 2);
    }

    #[test]
    fn segments_split_escapes_and_clusters() {
        let tokens = segments("a\x1b[1mb");
        assert_eq!(
            tokens,
            vec![
                Segment::Cluster("a".into()),
                Segment::Escape("\x1b[1m".into()),
                Segment::Cluster("b".into()),
            ]
        );
    }

    #[test]
    fn segments_keep_dec_save_restore() {
        let tokens = segments("\x1b7x\x1b8");
        assert_eq!(tokens[0], Segment::Escape("\x1b7".into()));
        assert_eq!(tokens[2], Segment::Escape("\x1b8".into()));
    }

    #[test]
    fn unterminated_escape_consumes_rest() {
        let tokens = segments("a\x1b[31");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1], Segment::Escape("\x1b[31".into()));
    }

    #[test]
    fn truncate_respects_wide_boundaries() {
        assert_eq!(truncate_to_width("你好", 3), "你");
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
