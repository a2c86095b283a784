//! Block algebra module orchestrator.
//!
//! The immutable tree type and its structural algebra live in the private
//! `core` module, paragraph flowing in `flow`, and the bundled annotation
//! payload in `annot`.

mod annot;
mod core;
mod flow;

pub use annot::{Annot, command_block, reactive, styled};
pub use core::{
    Annotation, Block, Content, align_block, align_horiz, align_vert, annotate, beside, character,
    empty_block, hcat, line, move_down, move_left, move_right, move_up, null_block, punctuate_h,
    punctuate_v, stack, text, un_annotate, vcat,
};
pub use flow::{columns, para};
