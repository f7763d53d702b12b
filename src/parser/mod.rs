//! Escape sequence tokenizer
//!
//! A streaming tokenizer that converts raw input into text runs and CSI
//! command tokens, with carryover for sequences split across calls.

mod token;
mod tokenizer;

pub use token::{Command, CsiToken, Token};
pub use tokenizer::Tokenizer;
