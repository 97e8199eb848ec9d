//! # Story Model
//!
//! The route tree of a branching story - characters, per-route deaths and
//! events, decision branches and the routes they lead to. This crate is the
//! single source of truth for tree state and enforces its invariants at edit
//! time; it knows nothing about files or terminals.
//!
//! Ownership is a strict tree. A [`StoryTree`] owns its base routes, a
//! [`Route`] owns its optional [`Branch`], and every [`Choice`] owns exactly
//! one child route. Nothing points back up; callers that need ancestor
//! context thread it down explicitly or address routes with a [`RoutePath`].

pub mod days;
pub mod error;
pub mod names;
pub mod route;
pub mod tree;

pub use days::*;
pub use error::*;
pub use names::*;
pub use route::*;
pub use tree::*;
