mod lookup_operations;
mod map_operations;
mod state;
mod system_operations;

pub use map_operations::Viewport;
pub use state::{App, LookupOutcome, ViewState};
