pub mod classes;
pub mod filter;
pub mod split;
pub mod triage;
pub mod util;

pub use classes::*;
pub use filter::*;
pub use split::*;
pub use triage::*;
pub use util::*;
