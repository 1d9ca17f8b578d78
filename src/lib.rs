#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod bar_kind;
pub mod barbell;
pub mod calc_error;
pub mod config;
pub mod inventory;
pub mod loaded_bar;
pub mod packer;
pub mod percentage;
pub mod plate;
pub mod plate_count;
pub mod selection;
pub mod unit;
pub mod weight;
