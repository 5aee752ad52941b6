pub mod speed;
pub mod state;

pub use speed::{SpeedRange, animation_delay};
pub use state::{PlaybackMode, PlaybackState, StepDirection, TimerHandle};
