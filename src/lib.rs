#[macro_use]
extern crate derive_more;

pub mod basic;
pub mod error;
pub mod food;
pub mod game;
pub mod snake;
pub mod snake_control;
mod view;
