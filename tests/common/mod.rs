//! Common utilities for integration tests

pub mod mock_pdfs;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_pdfs::{NarrowPeak, UniformUnit};
pub use test_helpers::{reference_flow, reference_settings, relative_error, standard_distribution};
