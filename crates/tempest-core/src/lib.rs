pub mod error;
pub mod generator;
pub mod noise;
pub mod path;
pub mod statistic;

// Core types
pub use error::ParamError;
pub use path::{Path, PathSpec, Time};

// Noise streams
pub use noise::{mix_seed, NoiseSource};

// Path generation and reduction
pub use generator::PathGenerator;
pub use statistic::{PositiveProportion, Statistic, StatisticKind, TimeOfMax};
