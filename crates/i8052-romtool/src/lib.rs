pub mod listing;
pub mod table;

// Re-export commonly used types/functions for the CLI and tests
pub use listing::{build_listing, render_listing, Listing, ListingRow, Role};
pub use table::{table_report, TableReport, TableRow};
