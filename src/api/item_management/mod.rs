pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod merge;
pub mod metadata;
pub mod models;
pub mod toggle;
pub mod uploads;
