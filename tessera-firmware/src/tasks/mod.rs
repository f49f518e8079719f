//! Embassy async tasks
//!
//! Each task runs independently and communicates through the statics in
//! [`crate::channels`].

pub mod net;
pub mod render;
pub mod timekeeper;

pub use net::{link_task, net_stack_task, wifi_chip_task};
pub use timekeeper::timekeeper_task;
