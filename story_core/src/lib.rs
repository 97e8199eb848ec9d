//! # Story Core
//!
//! Everything that works on a whole [`story_model::StoryTree`]: reading and
//! writing the JSON route document, tallying deaths down the tree, walking and
//! rendering it, and turning user text into typed edit values.
//!
//! ## Core Components
//!
//! - **document**: the persisted JSON format, parser and serializer
//! - **persist**: whole-file load and save
//! - **traversal**: pre-order walk with per-route death tallies, text rendering
//! - **input**: integer and day-list parsing shared by editing front-ends
//! - **config**: display and save settings read from TOML
//!
//! Death tallies are computed on the fly during a walk and never written back
//! into routes, so walking a tree any number of times gives the same result.

pub mod config;
pub mod document;
pub mod error;
pub mod input;
pub mod persist;
pub mod traversal;

pub use config::*;
pub use document::*;
pub use error::*;
pub use input::*;
pub use persist::*;
pub use traversal::*;
