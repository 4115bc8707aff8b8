pub mod config;
pub mod controller;
pub mod events;
pub mod gateway;
pub mod prompts;
pub mod ui;
