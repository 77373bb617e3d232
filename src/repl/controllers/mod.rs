//! # Controllers Module
//!
//! The input loop tying events, editor state and views together.

pub mod app_controller;

pub use app_controller::AppController;
