//! UI Components
//!
//! Stateless views over the stores. The table keeps its search term and the
//! chart its hovered bar; neither writes to a store.

pub mod county_table;
pub mod error_panel;
pub mod loading;
pub mod nav;
pub mod population_chart;

pub use county_table::CountyTable;
pub use error_panel::ErrorPanel;
pub use loading::Loading;
pub use nav::Nav;
pub use population_chart::PopulationChart;
