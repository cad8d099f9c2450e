//! UI Components for Love Notes.

mod heart_background;
mod icons;
mod note_viewer;
mod password_gate;
mod progress_dots;

pub use heart_background::HeartBackground;
pub use icons::{HeartIcon, LockIcon, SparklesIcon};
pub use note_viewer::NoteViewer;
pub use password_gate::PasswordGate;
pub use progress_dots::ProgressDots;
