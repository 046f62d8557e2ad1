//! Response types used by API handlers.
//!
//! Request bodies are the `New*` field sets in [`crate::models`].

mod responses;

pub use responses::*;
