#![allow(dead_code)]

pub mod architecture;
pub mod catalog;
pub mod observer;
