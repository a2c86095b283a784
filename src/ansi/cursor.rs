//! Cursor command attributes.
//!
//! These wrap common cursor control sequences so call sites do not need to
//! hand-roll escape codes. Each helper returns a command [`Attr`] that can be
//! stacked into an [`super::AnsiStyle`] and attached to a zero-size block,
//! letting cursor motion compose through ordinary block concatenation.

use super::style::Attr;

const CSI: &str = "\x1b[";

/// Move the cursor to an absolute 1-based `row` and `column`.
pub fn move_to(row: u16, column: u16) -> Attr {
    Attr::command("cursor-move-to", format!("{CSI}{row};{column}H"))
}

/// Move the cursor horizontally to the provided 1-based column.
pub fn move_to_column(column: u16) -> Attr {
    Attr::command("cursor-move-to-column", format!("{CSI}{column}G"))
}

/// Move the cursor up `lines` rows.
pub fn move_up(lines: u16) -> Attr {
    let code = if lines == 0 {
        String::new()
    } else {
        format!("{CSI}{lines}A")
    };
    Attr::command("cursor-up", code)
}

/// Move the cursor down `lines` rows.
pub fn move_down(lines: u16) -> Attr {
    let code = if lines == 0 {
        String::new()
    } else {
        format!("{CSI}{lines}B")
    };
    Attr::command("cursor-down", code)
}

/// Move the cursor right by `cols` columns.
pub fn move_right(cols: u16) -> Attr {
    let code = if cols == 0 {
        String::new()
    } else {
        format!("{CSI}{cols}C")
    };
    Attr::command("cursor-right", code)
}

/// Move the cursor left by `cols` columns.
pub fn move_left(cols: u16) -> Attr {
    let code = if cols == 0 {
        String::new()
    } else {
        format!("{CSI}{cols}D")
    };
    Attr::command("cursor-left", code)
}

/// Save the current cursor position (DEC form, survives truncation as a
/// 2-character escape token).
pub fn save_position() -> Attr {
    Attr::command("cursor-save", "\x1b7")
}

/// Restore the most recently saved cursor position.
pub fn restore_position() -> Attr {
    Attr::command("cursor-restore", "\x1b8")
}

/// Hide the cursor.
pub fn hide() -> Attr {
    Attr::command("cursor-hide", "\x1b[?25l")
}

/// Show the cursor.
pub fn show() -> Attr {
    Attr::command("cursor-show", "\x1b[?25h")
}

/// Clear from the cursor to the end of the line.
pub fn clear_to_line_end() -> Attr {
    Attr::command("clear-line-end", "\x1b[K")
}
