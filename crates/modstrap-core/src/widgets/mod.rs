//! View building blocks: text input, spinner and progress bar

pub mod input;
pub mod progress;
pub mod spinner;

pub use input::TextInput;
pub use progress::ProgressBar;
pub use spinner::Spinner;
