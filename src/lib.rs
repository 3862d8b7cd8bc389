//! # Bird Calls Telegram Bot
//!
//! A Telegram bot that lets users browse a catalog of bird species through
//! inline keyboards and listen to a randomly chosen recording of the
//! selected bird's call.

pub mod bot;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod locale;
pub mod localization;
pub mod navigation;
