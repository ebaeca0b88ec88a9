#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

mod scatter;
pub use scatter::{plot_alignment, ScatterPlot, VizError};

mod rerun_backend;
pub use rerun_backend::RerunScatter;
