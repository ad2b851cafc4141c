pub mod aggregate;
pub mod exec;
pub mod grid;
pub mod output;

pub use aggregate::{aggregate, bucket_for, Aggregator, RepoOutcome};
pub use exec::exec;
pub use grid::build_grid;
pub use output::{cell_text, classify, day_label, month_header, render, Tier};
