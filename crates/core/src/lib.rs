//! Card-combination rules for the bomb shedding game. Keep this crate free
//! of IO and platform concerns.

pub mod analyzer;
pub mod buckets;
pub mod cards;
pub mod context;
pub mod deck;
pub mod error;
pub mod group;
pub mod hand;
pub mod prompt;
pub mod registry;
pub mod rng;
pub mod rules;
pub mod validate;

pub use analyzer::*;
pub use buckets::*;
pub use cards::*;
pub use context::*;
pub use deck::*;
pub use error::*;
pub use group::*;
pub use hand::*;
pub use prompt::*;
pub use registry::*;
pub use rng::*;
pub use rules::*;
pub use validate::*;
