//! Abiq CLI - Virtual appliance resolution for an Abiquo-style cloud.

pub mod commands;
pub mod output;
