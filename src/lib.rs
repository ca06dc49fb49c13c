//! Pager Navigation Model
//!
//! Platform-agnostic view-model for pagination widgets. Given the page
//! position, a target endpoint, and the query parameters the listing was
//! reached with, it answers everything a pager renders from: previous/next
//! availability, per-page URLs, and the abbreviated strip of page numbers
//! with ellipsis markers. Hosts own the instance and re-render from it;
//! nothing here touches the DOM or issues requests.

pub mod items;
pub mod query;
pub mod state;

// Re-export commonly used types
pub use items::{PageItem, page_items};
pub use query::{ParamValue, encode_component};
pub use state::{PAGE_KEY, Pagination};
