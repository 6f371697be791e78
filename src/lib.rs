#![forbid(unsafe_code)]
//! tgen — render a directory as a tree listing and rebuild directories from one.

pub mod builder;
pub mod cli;
pub mod grammar;
pub mod ignore;
pub mod output;
pub mod tree;
