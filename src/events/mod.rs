pub mod pointer;
pub mod scroll;

pub use pointer::wire_pointer_listeners;
pub use scroll::wire_scroll;
