//! Persistent refresh counter and file helpers

mod error;
mod io;
mod paths;
mod state;

pub use error::StoreError;
pub use io::atomic_write;
pub use paths::Paths;
pub use state::{load_state, save_state, CounterState};
