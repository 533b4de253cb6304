// pokeminmax schema - shared type definitions
// This crate holds the element enumeration, the effectiveness table and the
// creature data types shared between the main crate and its build script,
// which compiles the bundled roster with postcard.

pub use creature_data::*;
pub use element_types::*;

pub mod creature_data;
pub mod element_types;
