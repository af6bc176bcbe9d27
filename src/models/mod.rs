//! Runtime models of the HTTP service.

pub mod config;
