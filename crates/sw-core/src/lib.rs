pub mod argmax;
pub mod counter;
pub mod kernel;
pub mod matrix;
pub mod revcomp;
pub mod traceback;

pub use argmax::argmax;
pub use counter::{count, AlignmentCounts};
pub use kernel::fill;
pub use matrix::score;
pub use revcomp::{complement_base, reverse_complement};
pub use traceback::trace;
