//! Fixture data served in demo mode

pub mod data;
