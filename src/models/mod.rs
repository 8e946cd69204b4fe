pub mod common;
pub mod generation;
pub mod translation;

pub use common::*;
pub use generation::*;
pub use translation::*;
