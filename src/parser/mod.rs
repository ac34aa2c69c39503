mod authority;
mod state;

pub use authority::{Authority, parse_authority};
pub use state::State;
