pub mod batch;
pub mod histogram;
pub mod sweep;

pub use batch::{Batch, BatchRunner};
pub use histogram::Histogram;
pub use sweep::{Sweep, SweepRunner};
