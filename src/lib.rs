// src/lib.rs

//! Job board client library: fetches listings from a regional jobs API and
//! filters and sorts them locally.

pub mod error;
pub mod filter;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod services;
pub mod utils;
