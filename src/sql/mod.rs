//! Safe SQL builder: identifiers from the column table only, values as parameters.

mod builder;
pub use builder::*;
