//! Small parsing helpers shared by controllers and domain models.

pub mod parse;
