pub mod constants;
pub mod contact;
pub mod gate;
pub mod hero;
pub mod layout;
pub mod orbs;
pub mod pointer;
pub mod projects;
pub mod scroll;
pub mod surface;
pub mod theme;

pub use constants::*;
pub use gate::*;
pub use hero::*;
pub use layout::*;
pub use orbs::*;
pub use surface::*;
