//! Asset discovery and classification.

mod partition;
mod scan;

pub use partition::Partition;
pub use scan::scan_assets;
