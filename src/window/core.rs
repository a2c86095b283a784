/// Placement rule for fitting content of one size into a window of another.
///
/// `Center1` biases any uneven spare space to the leading side, `Center2`
/// to the trailing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    First,
    Last,
    Center1,
    Center2,
}

impl Alignment {
    /// Split pivot: element count kept on the leading (reversed) side.
    pub(crate) fn pivot_rev(self, n: usize) -> usize {
        match self {
            Alignment::First => 0,
            Alignment::Last => n,
            Alignment::Center1 => n / 2,
            Alignment::Center2 => n.div_ceil(2),
        }
    }

    /// Element count kept on the trailing side; complement of [`Self::pivot_rev`].
    pub(crate) fn pivot_fwd(self, n: usize) -> usize {
        match self {
            Alignment::First => n,
            Alignment::Last => 0,
            Alignment::Center1 => n.div_ceil(2),
            Alignment::Center2 => n / 2,
        }
    }
}

/// Leading gap when content of size `s` sits in a window of size `n`.
///
/// This is the exact offset the renderer produces for a sub-box, so the
/// position tracker uses it verbatim.
pub fn leading_gap(align: Alignment, n: usize, s: usize) -> usize {
    align.pivot_rev(n).saturating_sub(align.pivot_rev(s))
}

/// First `n` elements of `xs`, extended with copies of `pad` when `xs` runs
/// short.
pub fn take_padded<T: Clone>(xs: &[T], pad: &T, n: usize) -> Vec<T> {
    let mut out: Vec<T> = xs.iter().take(n).cloned().collect();
    while out.len() < n {
        out.push(pad.clone());
    }
    out
}

/// Length-`n` window over `xs` conceptually embedded in an infinite run of
/// `pad`, positioned per `align`.
///
/// `xs` is split at the alignment pivot, each side is `take_padded` to its
/// share of `n`, and the sides are glued back together. The same construction
/// serves truncation and alignment-aware padding, on character tokens and on
/// whole row-strings alike.
pub fn take_aligned<T: Clone>(xs: &[T], align: Alignment, pad: &T, n: usize) -> Vec<T> {
    let (lead, tail) = xs.split_at(align.pivot_rev(xs.len()));
    let lead_rev: Vec<T> = lead.iter().rev().cloned().collect();
    let lead_take = take_padded(&lead_rev, pad, align.pivot_rev(n));
    let tail_take = take_padded(tail, pad, align.pivot_fwd(n));
    let mut out: Vec<T> = lead_take.into_iter().rev().collect();
    out.extend(tail_take);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_padded_cases() {
        assert_eq!(take_padded(&[1, 2, 3], &0, 0), Vec::<i32>::new());
        assert_eq!(take_padded(&[], &9, 3), vec![9, 9, 9]);
        assert_eq!(take_padded(&[1, 2, 3], &0, 2), vec![1, 2]);
        assert_eq!(take_padded(&[1, 2], &0, 4), vec![1, 2, 0, 0]);
    }

    #[test]
    fn aligned_padding_positions() {
        assert_eq!(take_aligned(&["a", "b"], Alignment::First, &".", 4), vec![
            "a", "b", ".", "."
        ]);
        assert_eq!(take_aligned(&["a", "b"], Alignment::Last, &".", 4), vec![
            ".", ".", "a", "b"
        ]);
    }

    #[test]
    fn center_bias_tie_break() {
        // one element in a window of two: Center1 trails, Center2 leads
        assert_eq!(take_aligned(&["x"], Alignment::Center1, &".", 2), vec![
            ".", "x"
        ]);
        assert_eq!(take_aligned(&["x"], Alignment::Center2, &".", 2), vec![
            "x", "."
        ]);
    }

    #[test]
    fn center_spare_space_distribution() {
        assert_eq!(take_aligned(&["a", "b"], Alignment::Center1, &".", 5), vec![
            ".", "a", "b", ".", "."
        ]);
        assert_eq!(take_aligned(&["a", "b"], Alignment::Center2, &".", 5), vec![
            ".", ".", "a", "b", "."
        ]);
    }

    #[test]
    fn aligned_truncation_windows() {
        let xs = ["a", "b", "c", "d", "e"];
        assert_eq!(take_aligned(&xs, Alignment::First, &".", 2), vec!["a", "b"]);
        assert_eq!(take_aligned(&xs, Alignment::Last, &".", 2), vec!["d", "e"]);
        assert_eq!(take_aligned(&xs, Alignment::Center1, &".", 2), vec![
            "b", "c"
        ]);
    }

    #[test]
    fn leading_gap_matches_pivot_arithmetic() {
        assert_eq!(leading_gap(Alignment::First, 5, 2), 0);
        assert_eq!(leading_gap(Alignment::Last, 5, 2), 3);
        assert_eq!(leading_gap(Alignment::Center1, 5, 2), 1);
        assert_eq!(leading_gap(Alignment::Center2, 5, 2), 2);
        assert_eq!(leading_gap(Alignment::Center1, 2, 1), 1);
        assert_eq!(leading_gap(Alignment::Center2, 2, 1), 0);
    }
}
