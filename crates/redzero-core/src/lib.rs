#![deny(warnings)]
pub mod eval;
pub mod model;
pub mod rules;
