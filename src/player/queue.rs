use crate::api::models::Track;
use crate::player::loop_mode::LoopMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Result of computing the next cursor position. `EndOfQueue` carries no side
/// effect: the cursor stays where it is and the caller decides what stopping
/// looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    To(usize),
    EndOfQueue,
}

/// The ordered track list plus cursor governing playback order. Replaced
/// wholesale whenever playback starts from a different context; never merged.
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    cursor: Option<usize>,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole sequence and cursor. An out-of-range `start_index`
    /// clamps to 0. Loading an empty list is a caller contract breach.
    pub fn load(&mut self, tracks: Vec<Track>, start_index: usize) {
        debug_assert!(!tracks.is_empty(), "queue loads must be non-empty");
        if tracks.is_empty() {
            return;
        }
        let start = if start_index < tracks.len() {
            start_index
        } else {
            0
        };
        self.tracks = tracks;
        self.cursor = Some(start);
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.cursor = None;
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn set_cursor(&mut self, index: usize) {
        debug_assert!(index < self.tracks.len(), "cursor out of range");
        if index < self.tracks.len() {
            self.cursor = Some(index);
        }
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.cursor?)
    }

    /// First position of a track id, in playback order.
    pub fn position_of(&self, track_id: u64) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// Swap in a reordering of the same tracks (shuffle/unshuffle), keeping
    /// the cursor on `current_id` where possible (first match, else 0).
    pub(crate) fn reorder(&mut self, tracks: Vec<Track>, current_id: Option<u64>) {
        debug_assert_eq!(tracks.len(), self.tracks.len(), "reorder must preserve length");
        self.tracks = tracks;
        self.cursor = current_id.map(|id| self.position_of(id).unwrap_or(0));
    }

    /// Compute where the cursor would move. `Previous` wraps unconditionally
    /// (a re-listen convenience); `Next` honors the loop policy. `LoopMode::One`
    /// never reaches this point; the session replays before advancing.
    pub fn advance(&self, direction: Direction, loop_mode: LoopMode) -> Advance {
        debug_assert!(!self.tracks.is_empty(), "advance on an empty queue");
        debug_assert!(self.cursor.is_some(), "advance without a current track");
        let cursor = self.cursor.unwrap_or(0);
        let last = self.tracks.len() - 1;

        match direction {
            Direction::Next => {
                debug_assert!(loop_mode != LoopMode::One, "loop-one is handled before advance");
                if cursor < last {
                    Advance::To(cursor + 1)
                } else if loop_mode == LoopMode::All {
                    Advance::To(0)
                } else {
                    Advance::EndOfQueue
                }
            }
            Direction::Previous => {
                if cursor == 0 {
                    Advance::To(last)
                } else {
                    Advance::To(cursor - 1)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(id: u64) -> Track {
        Track {
            id,
            title: format!("Track {id}"),
            artist: "Test Artist".to_string(),
            audio_url: Some(format!("/audio/{id}.mp3")),
            ..Default::default()
        }
    }

    fn queue_of(ids: &[u64], start: usize) -> Queue {
        let mut queue = Queue::new();
        queue.load(ids.iter().copied().map(track).collect(), start);
        queue
    }

    #[test]
    fn load_positions_cursor_at_start_index() {
        let queue = queue_of(&[1, 2, 3], 1);
        assert_eq!(queue.cursor(), Some(1));
        assert_eq!(queue.current().map(|t| t.id), Some(2));
    }

    #[test]
    fn load_clamps_out_of_range_start_to_zero() {
        let queue = queue_of(&[1, 2, 3], 9);
        assert_eq!(queue.cursor(), Some(0));
        assert_eq!(queue.current().map(|t| t.id), Some(1));
    }

    #[test]
    fn next_within_bounds_moves_forward() {
        let queue = queue_of(&[1, 2, 3], 0);
        assert_eq!(queue.advance(Direction::Next, LoopMode::Off), Advance::To(1));
    }

    #[test]
    fn next_at_end_with_loop_off_signals_end_of_queue() {
        let queue = queue_of(&[1, 2, 3], 2);
        assert_eq!(
            queue.advance(Direction::Next, LoopMode::Off),
            Advance::EndOfQueue
        );
        // advance never mutates; the cursor is untouched
        assert_eq!(queue.cursor(), Some(2));
    }

    #[test]
    fn next_at_end_with_loop_all_wraps_to_zero() {
        let queue = queue_of(&[1, 2, 3], 2);
        assert_eq!(queue.advance(Direction::Next, LoopMode::All), Advance::To(0));
    }

    #[test]
    fn previous_wraps_regardless_of_loop_mode() {
        let queue = queue_of(&[1, 2, 3], 0);
        assert_eq!(
            queue.advance(Direction::Previous, LoopMode::Off),
            Advance::To(2)
        );
        assert_eq!(
            queue.advance(Direction::Previous, LoopMode::All),
            Advance::To(2)
        );
    }

    #[test]
    fn position_of_finds_first_occurrence() {
        let queue = queue_of(&[5, 6, 7], 0);
        assert_eq!(queue.position_of(7), Some(2));
        assert_eq!(queue.position_of(42), None);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut queue = queue_of(&[1], 0);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.cursor(), None);
        assert!(queue.current().is_none());
    }
}
