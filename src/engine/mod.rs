//! The stochastic search core: chromosome encoding, fitness scoring,
//! genetic operators, and the generational evolution driver.

pub mod chromosome;
pub mod evolution;
pub mod fitness;
pub mod operators;
pub mod progress;

pub use chromosome::{Chromosome, Gene, GenePool};
pub use evolution::{EvolutionEngine, EvolutionOutcome, Termination};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressCallback, ProgressMessage};
