//! Reusable UI components.

pub mod dev_toolbar;
