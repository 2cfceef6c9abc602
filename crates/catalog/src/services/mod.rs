pub mod collate;
pub mod facets;
pub mod filter;
pub mod sort;
