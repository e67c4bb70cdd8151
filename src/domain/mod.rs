//! Domain layer - pure business logic with no I/O.

pub mod conversation;
pub mod profile;
pub mod recommendation;
pub mod risk;
