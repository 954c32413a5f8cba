pub mod definitions;
pub mod envelope;
pub mod result;

pub use definitions::*;
pub use envelope::*;
pub use result::*;
