pub mod controller;
pub mod error;
pub mod loader;
pub mod presentation;
pub mod services;
pub mod state;
