//! View models
//!
//! Pure functions from loaded data to what a renderer draws. The terminal
//! dashboard and the browser client both build on these.

pub mod chart;
pub mod format;
pub mod table;
pub mod text;

pub use chart::{Bar, ChartModel, Tooltip};
pub use format::thousands;
pub use table::{filter_counties, matches, TableModel, TableRow, EMPTY_MESSAGE};
