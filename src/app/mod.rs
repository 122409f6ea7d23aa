pub mod help;
pub mod input;
pub mod state;

pub use input::{Command, InputError};
pub use state::App;
