//! Context-menu UI: a focusable button column over two live status rows.

mod state;
mod view;

pub use state::{MenuButton, MenuState};
pub use view::render;
