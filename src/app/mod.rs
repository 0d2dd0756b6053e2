mod events;
mod mouse;
mod render;
mod state;

pub use state::{App, Focus, Status};

#[cfg(test)]
mod test_helpers;
