//! Headless model of the analyzer page: state, pure rendering, the action
//! reducer, and the controller that runs its effects.
pub mod controller;
pub mod dispatch;
pub mod render;
pub mod state;
