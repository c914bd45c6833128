//! Playback core: queue, shuffle, loop, ad scheduling, and the session that
//! orchestrates them. Everything here is plain Rust; the browser glue lives
//! in `components::audio_manager`, which drives this state machine from media
//! element events.

pub mod ads;
pub mod loop_mode;
pub mod queue;
pub mod session;
pub mod shuffle;
pub mod source;

pub use ads::{AdScheduler, AdState, AD_BREAK_SECONDS, AD_TRACK_ID, DEFAULT_AD_INTERVAL};
pub use loop_mode::LoopMode;
pub use queue::{Advance, Direction, Queue};
pub use session::{PlayError, PlayOutcome, PlayerSession, SideEffect};
pub use shuffle::ShuffleState;
pub use source::QueueSource;
