pub mod account;
pub mod dashboard;
pub mod exercise;
pub mod patient;
pub mod progress;
pub mod task;
