mod gui_app;
mod pointer_input;
pub mod ports;
mod state;

pub use gui_app::GuiApp;
pub use pointer_input::{PointerEvent, PointerInputState};
pub use state::{GuiAppState, Screen};
