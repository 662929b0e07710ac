pub mod favorites;
pub mod snapshot;
pub mod view_state;
