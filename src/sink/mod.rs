mod options;
pub use options::*;

mod sink;
pub use sink::*;
