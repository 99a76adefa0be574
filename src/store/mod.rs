//! Content stores: one per public entity, each pairing the database table
//! with an in-memory list used for rendering. The list is fetched whole at
//! startup and patched after every acknowledged write, so pages read a
//! consistent local copy without a query per request. Cross-process edits
//! stay invisible until the next refetch; last write wins.

pub use cache::*;
pub use projects::*;
pub use services::*;
pub use testimonials::*;

mod cache;
mod projects;
mod services;
mod testimonials;
