mod defs;
pub use crate::defs::*;

mod output;
pub use crate::output::*;
