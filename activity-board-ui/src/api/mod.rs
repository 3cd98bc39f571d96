//! Backend access for the dashboard

pub mod client;

pub use client::GlooClient;
