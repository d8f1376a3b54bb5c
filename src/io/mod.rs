/// CSV export of projections.
pub mod export;
