//! File System Abstraction
//!
//! Path handling and the small slice of file access the transform needs: the
//! thumbnail existence check, reading sources and writing outputs.

pub mod native;
pub mod testing;
pub mod types;
pub mod util;

pub use native::*;
pub use types::*;
pub use util::*;
