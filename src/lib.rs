//! Flavour Lens - Relationship Pattern Analysis Engine
//!
//! This crate implements the classification-and-scoring core of the Flavour
//! Lens quiz application: flavour archetype classification from quiz answers,
//! composite relationship metrics, content-addressed insight caching, and
//! achievement unlock evaluation.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
