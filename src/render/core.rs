use std::time::Instant;

use crate::ansi::{RESET, StyleAnnotation, apply_styling};
use crate::block::{Block, Content};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{RenderMetrics, block_count};
use crate::width::segments;
use crate::window::{take_aligned, take_padded};

use super::processor::{AnsiProcessor, LineProcessor, PlainProcessor};

/// Which line-processing pipeline a render uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    /// Escape-blind truncate/pad, for trees with no styling annotations.
    Plain,
    /// Escape-preserving pipeline, safe whenever annotations may be present.
    #[default]
    Pretty,
}

/// Final join policy for a render.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub style: RenderStyle,
    /// Omit the structural trailing newline; intended for mid-screen redraws.
    pub partial: bool,
    /// Keep trailing whitespace on every row.
    pub preserve_whitespace: bool,
}

/// Render `block` to its final string form.
pub fn render<A: StyleAnnotation>(block: &Block<A>, options: RenderOptions) -> String {
    let lines = match options.style {
        RenderStyle::Plain => render_lines(block, &PlainProcessor),
        RenderStyle::Pretty => render_lines(block, &AnsiProcessor),
    };
    let mut joined = if options.preserve_whitespace {
        lines.join("\n")
    } else {
        lines
            .iter()
            .map(|line| trim_line_end(line))
            .collect::<Vec<_>>()
            .join("\n")
    };
    if !options.partial {
        joined.push('\n');
    }
    joined
}

/// Render, emit a structured trace event through `logger`, and feed the
/// host's counters when it passes some.
///
/// Only the logger performs I/O, and a failing sink never fails the render.
pub fn render_traced<A: StyleAnnotation>(
    block: &Block<A>,
    options: RenderOptions,
    logger: &Logger,
    metrics: Option<&mut RenderMetrics>,
) -> String {
    let started = Instant::now();
    let rendered = render(block, options);
    let elapsed = started.elapsed();
    if let Some(metrics) = metrics {
        metrics.record_render(rendered.lines().count());
        metrics.record_blocks(block_count(block));
    }
    let event = event_with_fields(LogLevel::Debug, "render", "render_complete", [
        json_kv("rows", block.rows() as u64),
        json_kv("cols", block.cols() as u64),
        json_kv("bytes", rendered.len() as u64),
        json_kv("elapsed_us", elapsed.as_micros() as u64),
    ]);
    let _ = logger.log_event(event);
    rendered
}

/// Render `block` to raw rows, before the join/trim policy applies.
///
/// Annotation post-processing happens bottom-up, once per node: a node's own
/// subtree is rendered to plain rows first, then its style (if any) wraps
/// those rows. Children wrapped themselves during their own recursive call,
/// so nesting composes without re-walking.
pub fn render_lines<A, P>(block: &Block<A>, processor: &P) -> Vec<String>
where
    A: StyleAnnotation,
    P: LineProcessor + ?Sized,
{
    let rows = block.rows();
    let cols = block.cols();

    if rows == 0 || cols == 0 {
        // zero-height subtrees still surface their raw control codes as one
        // synthetic line, so cursor commands compose through ordinary
        // concatenation; the parent folds the line into a real row
        if rows == 0 {
            let sequence = command_sequences(block);
            return if sequence.is_empty() {
                Vec::new()
            } else {
                vec![sequence]
            };
        }
        if !contains_command(block) {
            return Vec::new();
        }
        // zero-width subtrees with embedded commands keep walking so the
        // codes stay on their own rows
    }

    let blank_row = " ".repeat(cols);
    let mut lines = match block.content() {
        Content::Blank => vec![blank_row.clone(); rows],
        Content::Text(content) => {
            let first = processor.process_line(content, cols);
            take_padded(&[first], &blank_row, rows)
        }
        Content::Row(children) => {
            let mut merged = vec![String::new(); rows];
            for child in children {
                let child_blank = " ".repeat(child.cols());
                let child_lines = take_padded(&render_lines(child, processor), &child_blank, rows);
                for (row, child_line) in merged.iter_mut().zip(child_lines) {
                    row.push_str(&child_line);
                }
            }
            merged
                .into_iter()
                .map(|row| processor.process_line(&row, cols))
                .collect()
        }
        Content::Col(children) => {
            let mut stacked: Vec<String> = Vec::new();
            // command codes from zero-height children ride on the next row,
            // never as rows of their own
            let mut pending = String::new();
            for child in children {
                let child_lines = render_lines(child, processor);
                if child.rows() == 0 {
                    pending.push_str(&child_lines.concat());
                    continue;
                }
                for line in child_lines {
                    if pending.is_empty() {
                        stacked.push(line);
                    } else {
                        stacked.push(std::mem::take(&mut pending) + &line);
                    }
                }
            }
            if !pending.is_empty() {
                match stacked.last_mut() {
                    Some(last) => last.push_str(&pending),
                    None => stacked.push(pending),
                }
            }
            take_padded(&stacked, &blank_row, rows)
                .into_iter()
                .map(|row| processor.process_line(&row, cols))
                .collect()
        }
        Content::Sub {
            child,
            h_align,
            v_align,
        } => {
            let inner: Vec<String> = render_lines(child.as_ref(), processor)
                .iter()
                .map(|row| processor.process_line_aligned(row, cols, *h_align))
                .collect();
            take_aligned(&inner, *v_align, &blank_row, rows)
        }
    };

    if let Some(style) = block.payload().and_then(StyleAnnotation::as_style) {
        if let Some(sequence) = style.escape_sequence() {
            lines = apply_styling(&lines, &sequence);
        }
    }

    lines
}

/// Concatenated escape sequences of every command-carrying annotation in the
/// subtree, in depth-first order.
fn command_sequences<A: StyleAnnotation>(block: &Block<A>) -> String {
    let mut out = String::new();
    collect_command_sequences(block, &mut out);
    out
}

fn collect_command_sequences<A: StyleAnnotation>(block: &Block<A>, out: &mut String) {
    if let Some(style) = block.payload().and_then(StyleAnnotation::as_style) {
        if style.has_command() {
            if let Some(sequence) = style.escape_sequence() {
                out.push_str(&sequence);
            }
        }
    }
    match block.content() {
        Content::Blank | Content::Text(_) => {}
        Content::Row(children) | Content::Col(children) => {
            for child in children {
                collect_command_sequences(child, out);
            }
        }
        Content::Sub { child, .. } => collect_command_sequences(child, out),
    }
}

/// Whether any node in the subtree carries a command annotation. Zero-size
/// subtrees without one render as nothing; with one, the walk must descend so
/// the raw codes survive.
fn contains_command<A: StyleAnnotation>(block: &Block<A>) -> bool {
    if block
        .payload()
        .and_then(StyleAnnotation::as_style)
        .is_some_and(|style| style.has_command())
    {
        return true;
    }
    match block.content() {
        Content::Blank | Content::Text(_) => false,
        Content::Row(children) | Content::Col(children) => children.iter().any(contains_command),
        Content::Sub { child, .. } => contains_command(child),
    }
}

/// Trim trailing whitespace that sits outside any active escape sequence;
/// whitespace inside a styled span keeps its (possibly colored) background.
fn trim_line_end(line: &str) -> String {
    let tokens = segments(line);
    let mut active = false;
    let states: Vec<bool> = tokens
        .iter()
        .map(|token| {
            if token.is_escape() {
                let code = token.as_str();
                if code == RESET {
                    active = false;
                } else if code.starts_with("\x1b[") && code.ends_with('m') {
                    active = true;
                }
            }
            active
        })
        .collect();
    let mut drop = vec![false; tokens.len()];
    for idx in (0..tokens.len()).rev() {
        let token = &tokens[idx];
        if token.is_escape() {
            continue;
        }
        let text = token.as_str();
        if !states[idx] && !text.is_empty() && text.chars().all(char::is_whitespace) {
            drop[idx] = true;
        } else {
            break;
        }
    }
    tokens
        .iter()
        .zip(&drop)
        .filter(|(_, dropped)| !**dropped)
        .map(|(token, _)| token.as_str())
        .collect()
}
