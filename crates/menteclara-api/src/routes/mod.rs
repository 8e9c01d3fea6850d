pub mod accounts;
pub mod assistant;
pub mod auth;
pub mod exercises;
pub mod health;
pub mod patients;
pub mod tasks;
pub mod therapists;
