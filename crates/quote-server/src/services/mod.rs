//! Business logic services

pub mod retrieval;
pub mod search;
pub mod seed;
pub mod writer;

pub use retrieval::RetrievalService;
pub use search::SearchService;
pub use seed::seed_if_empty;
pub use writer::QuoteWriter;
