//! Small helpers shared by the config, content and generator layers.

pub mod date;
pub mod experience;
pub mod log;
pub mod slug;
