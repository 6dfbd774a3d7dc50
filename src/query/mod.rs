mod engine;

pub use engine::{sort_by_name, DocumentQueryService};
