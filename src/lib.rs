//! Library crate for poker-league, exposing modules for binaries and tests.

pub mod cli;
pub mod config;
pub mod dao;
pub mod dto;
pub mod error;
pub mod game;
pub mod routes;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;
