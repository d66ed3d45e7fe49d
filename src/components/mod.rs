//! Reusable presentational components.

pub mod loading_screen;
