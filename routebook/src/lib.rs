//! # Routebook
//!
//! Terminal front-end for story route trees: print a tree, check it for
//! dangling character references, or walk it through nested menus and edit
//! it in place.
//!
//! The binary is a thin shell over [`app`]; everything here reads from a
//! [`std::io::BufRead`] and writes to a [`std::io::Write`], so sessions can be
//! scripted.

pub mod app;
pub mod command;
pub mod editor;
pub mod prompt;
pub mod session;

pub use app::*;
pub use editor::Editor;
pub use prompt::Prompter;
pub use session::Session;
