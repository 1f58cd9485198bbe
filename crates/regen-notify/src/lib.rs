mod animation;
mod surface;
mod toast;

pub use animation::slide_in_positions;
pub use surface::{LogSurface, ToastFrame, ToastSurface};
pub use toast::{ToastLayout, ToastNotifier, ToastOutcome};
