mod severity;
pub use severity::*;

mod threshold;
pub use threshold::*;
