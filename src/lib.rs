pub mod features;

pub use features::ai::{AiError, AiProvider, AiService};
pub use features::app::app_state::AppState;
pub use features::app::routes::configure;
