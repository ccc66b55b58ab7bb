// File: ./src/model/mod.rs
pub mod blocks;
pub mod display;
pub mod item;
pub mod ordering;
pub mod priority;
pub mod validate;

pub use blocks::{Block, blocks_for_date, group_into_blocks};
pub use item::{EventRecord, NOT_SPECIFIED};
pub use ordering::sort_events;
pub use priority::{KnownCategory, PriorityTable};
