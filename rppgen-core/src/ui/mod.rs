//! Terminal presentation: theme palettes, block painting, spinner.

pub mod markdown;
pub mod spinner;
pub mod theme;
