#![cfg_attr(not(test), forbid(unsafe_code))]
#![warn(clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod config;
pub mod controller;
pub mod models;
pub mod session;
pub mod validation;
pub mod view;
