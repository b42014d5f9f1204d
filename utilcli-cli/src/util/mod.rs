//! Terminal collaborators: clipboard and numbered menu

mod chooser;
mod clipboard;

pub use chooser::{Chooser, MenuChooser};
pub use clipboard::{Clipboard, SystemClipboard};
