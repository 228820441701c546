//! Sequencing domain models.
//!
//! Provides the data types the engine reads and produces. Domain-agnostic
//! within sequence-dependent setups: any "what ran before changes what
//! the next one costs" problem fits.
//!
//! # Domain Mappings
//!
//! | u-sequence | Manufacturing | Printing | Chemicals |
//! |------------|--------------|----------|-----------|
//! | Product index | Job/Product | Colour run | Batch recipe |
//! | Setup cost | Changeover time | Wash-up time | Cleaning time |
//! | SetupMatrix | Changeover table | Colour-change table | Cleaning matrix |
//! | SequenceResult | Production order | Press order | Campaign plan |

mod matrix;
mod sequence;

pub use matrix::SetupMatrix;
pub use sequence::SequenceResult;
