//! One renderer per page.

pub mod about;
pub mod data;
pub mod input;
pub mod result;
