//! Interaction state of the navigation bar and its desktop rendering.

pub mod api;
pub mod controller;
pub mod items;
pub mod menu_bar;
pub mod observer;
pub mod registry;
