pub use helpers::{move_towards, progress};

mod helpers;
