pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::wire_global_keydown;
pub use pointer::{wire_magnetic_buttons, wire_spotlight_cards};
pub use scroll::wire_parallax;
