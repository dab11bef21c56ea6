mod params;
pub mod pipeline;
mod result;

pub use params::{DEFAULT_PAGE, DEFAULT_PER_PAGE, RawSearchInput, SearchParams, SortDirection};
pub use result::SearchResult;
