//! Application pages module
//!
//! The site is a single scrolling page; sections are reached through anchor
//! links rather than routes.

mod home;

pub use home::HomePage;
