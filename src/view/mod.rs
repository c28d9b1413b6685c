//! Label-grouped projection of the shelf
//!
//! Projects the flat store into sections (first-seen label order,
//! store order within a label) and resolves display positions back to
//! true store indices. The projection is pure and carries everything
//! the renderer needs; it is rebuilt from a fresh load before every
//! edit or delete, never cached across mutations.

mod display;
mod projector;

pub use display::{DisplayModel, Row, Section};
pub use projector::project;
