use std::collections::HashSet;

/// Reset-all SGR sequence appended after every styled line.
pub const RESET: &str = "\x1b[0m";

const CSI: &str = "\x1b[";

/// Attribute families recognised by the style combiner.
///
/// The two color kinds conflict as a whole (only one foreground and one
/// background survive a combine); text and command attributes conflict by
/// name, so `bold` and `italic` coexist while duplicate `bold` collapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrKind {
    Foreground,
    Background,
    Text,
    Command,
}

/// A single styling attribute: an SGR code, or a raw control sequence for
/// the command kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attr {
    pub kind: AttrKind,
    pub name: String,
    pub code: String,
}

impl Attr {
    fn new(kind: AttrKind, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            code: code.into(),
        }
    }

    pub fn foreground(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(AttrKind::Foreground, name, code)
    }

    pub fn background(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(AttrKind::Background, name, code)
    }

    pub fn text(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(AttrKind::Text, name, code)
    }

    pub fn command(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self::new(AttrKind::Command, name, code)
    }

    fn conflict_key(&self) -> (AttrKind, Option<String>) {
        match self.kind {
            AttrKind::Foreground | AttrKind::Background => (self.kind, None),
            AttrKind::Text | AttrKind::Command => (self.kind, Some(self.name.clone())),
        }
    }
}

/// An ordered attribute set attached to a block annotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AnsiStyle {
    attrs: Vec<Attr>,
}

impl AnsiStyle {
    pub fn new(attrs: Vec<Attr>) -> Self {
        Self { attrs }
    }

    pub fn of(attr: Attr) -> Self {
        Self { attrs: vec![attr] }
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn has_command(&self) -> bool {
        self.attrs.iter().any(|attr| attr.kind == AttrKind::Command)
    }

    /// Flatten `styles` into one, resolving conflicts last-argument-wins.
    ///
    /// Survivors keep their original relative order: the flattened list is
    /// scanned in reverse keeping the first occurrence per conflict key, then
    /// reversed back.
    pub fn combine<I>(styles: I) -> AnsiStyle
    where
        I: IntoIterator<Item = AnsiStyle>,
    {
        let flat: Vec<Attr> = styles.into_iter().flat_map(|style| style.attrs).collect();
        let mut seen = HashSet::new();
        let mut kept: Vec<Attr> = flat
            .into_iter()
            .rev()
            .filter(|attr| seen.insert(attr.conflict_key()))
            .collect();
        kept.reverse();
        AnsiStyle { attrs: kept }
    }

    /// Escape sequence for this style: SGR codes joined with `;` inside one
    /// `ESC[..m`, then raw command sequences appended verbatim. `None` when
    /// there is nothing to emit.
    pub fn escape_sequence(&self) -> Option<String> {
        let sgr: Vec<&str> = self
            .attrs
            .iter()
            .filter(|attr| attr.kind != AttrKind::Command)
            .map(|attr| attr.code.as_str())
            .collect();
        let mut out = String::new();
        if !sgr.is_empty() {
            out.push_str(CSI);
            out.push_str(&sgr.join(";"));
            out.push('m');
        }
        for attr in self.attrs.iter().filter(|attr| attr.kind == AttrKind::Command) {
            out.push_str(&attr.code);
        }
        if out.is_empty() { None } else { Some(out) }
    }
}

/// Capability predicate the ANSI renderer dispatches on: does this annotation
/// payload carry a style?
pub trait StyleAnnotation {
    fn as_style(&self) -> Option<&AnsiStyle>;
}

impl StyleAnnotation for () {
    fn as_style(&self) -> Option<&AnsiStyle> {
        None
    }
}

/// Wrap rendered lines in `seq`, resuming it after embedded resets.
pub fn apply_styling(lines: &[String], seq: &str) -> Vec<String> {
    lines.iter().map(|line| style_line(line, seq)).collect()
}

fn style_line(line: &str, seq: &str) -> String {
    if line.starts_with(seq) {
        return line.to_string();
    }
    // nested annotated content has already reset itself; restart the outer
    // style after every embedded reset so it survives to the end of the line
    let resume = format!("{RESET}{seq}");
    let mut body = line.replace(RESET, &resume);
    if body.ends_with(seq) {
        // the line already ended in a reset; dropping the dangling resume
        // avoids a trailing double-reset
        body.truncate(body.len() - seq.len());
        format!("{seq}{body}")
    } else {
        format!("{seq}{body}{RESET}")
    }
}
