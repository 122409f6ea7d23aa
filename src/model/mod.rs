pub use petpals_core::{derive_mood, EngineError, Result};

pub mod config {
    pub use petpals_core::config::*;
}
pub mod generator {
    pub use petpals_core::generator::*;
}
pub mod history {
    pub use petpals_core::history::*;
}
pub mod interaction {
    pub use petpals_core::interaction::*;
}
pub mod metrics {
    pub use petpals_core::metrics::*;
}
pub mod selection {
    pub use petpals_core::selection::*;
}
pub mod session {
    pub use petpals_core::session::*;
}
pub mod state {
    pub use petpals_data::*;
}
