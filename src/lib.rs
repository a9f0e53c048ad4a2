pub mod columns;
pub mod data_cache;
pub mod filters;
pub mod playoffs;
pub mod rankings;
pub mod remote;
pub mod sample;
pub mod standings;
pub mod state;
pub mod tables;
pub mod timefmt;
