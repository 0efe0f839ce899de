//! Main module for mdlite library functionality

pub mod ast;
pub mod config;
pub mod formats;
pub mod generator;
pub mod lexing;
pub mod parsing;
pub mod processor;
pub mod testing;
pub mod token;
