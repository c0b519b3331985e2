pub mod admin;
pub mod browse;
pub mod claim;
pub mod contact;
pub mod dispatch;
pub mod item;
pub mod report;
pub mod shared;
pub mod stats;
