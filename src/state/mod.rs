//! Quiz authoring state

mod errors;
mod forms;
mod ids;
mod quiz;

pub use errors::*;
pub use forms::*;
pub use ids::*;
pub use quiz::*;
