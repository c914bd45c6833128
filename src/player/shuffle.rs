use crate::api::models::Track;
use crate::player::queue::Queue;
use rand::Rng;

/// Reversible shuffle over the queue. The pre-shuffle order is retained as
/// the canonical sequence for as long as shuffle stays on, so toggling off
/// restores the exact order, not just the same set of tracks. Shuffle is
/// active iff a canonical sequence is held.
#[derive(Debug, Clone, Default)]
pub struct ShuffleState {
    canonical: Option<Vec<Track>>,
}

/// Backward-swap Fisher-Yates; uniform over all permutations given an
/// unbiased source. Empty and single-element slices are no-op permutations.
fn shuffle_tracks<R: Rng>(rng: &mut R, tracks: &mut [Track]) {
    for i in (1..tracks.len()).rev() {
        let j = rng.gen_range(0..=i);
        tracks.swap(i, j);
    }
}

impl ShuffleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.canonical.is_some()
    }

    /// Capture the live order as canonical and shuffle the view, keeping the
    /// current track current. Re-entrant enable never recaptures.
    pub fn enable<R: Rng>(&mut self, rng: &mut R, queue: &mut Queue) {
        if self.canonical.is_some() {
            return;
        }
        self.canonical = Some(queue.tracks().to_vec());
        let current_id = queue.current().map(|t| t.id);
        let mut tracks = queue.tracks().to_vec();
        shuffle_tracks(rng, &mut tracks);
        queue.reorder(tracks, current_id);
    }

    /// Restore the canonical order verbatim and discard it, keeping the
    /// current track current.
    pub fn disable(&mut self, queue: &mut Queue) {
        let Some(canonical) = self.canonical.take() else {
            return;
        };
        let current_id = queue.current().map(|t| t.id);
        queue.reorder(canonical, current_id);
    }

    /// A queue was loaded while shuffle is on: the new list becomes the new
    /// canonical order, the view is freshly shuffled, and the cursor follows
    /// the track that was at the requested start index, matched by id, never
    /// by raw position in the shuffled result.
    pub fn recapture_for_load<R: Rng>(&mut self, rng: &mut R, queue: &mut Queue) {
        if self.canonical.is_none() {
            return;
        }
        self.canonical = Some(queue.tracks().to_vec());
        let origin_id = queue.current().map(|t| t.id);
        let mut tracks = queue.tracks().to_vec();
        shuffle_tracks(rng, &mut tracks);
        queue.reorder(tracks, origin_id);
    }

    /// Keep the canonical copy consistent when the queue is emptied out from
    /// under an active shuffle.
    pub(crate) fn sync_cleared(&mut self) {
        if let Some(canonical) = self.canonical.as_mut() {
            canonical.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    fn ids(queue: &Queue) -> Vec<u64> {
        queue.tracks().iter().map(|t| t.id).collect()
    }

    #[test]
    fn round_trip_restores_exact_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut queue = queue_of(&[1, 2, 3, 4, 5, 6, 7, 8], 0);
        let original = ids(&queue);

        let mut shuffle = ShuffleState::new();
        shuffle.enable(&mut rng, &mut queue);
        assert!(shuffle.is_active());
        shuffle.disable(&mut queue);

        assert!(!shuffle.is_active());
        assert_eq!(ids(&queue), original);
    }

    #[test]
    fn enable_and_disable_keep_the_current_track() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut queue = queue_of(&[1, 2, 3, 4, 5, 6], 3);
        let mut shuffle = ShuffleState::new();

        shuffle.enable(&mut rng, &mut queue);
        assert_eq!(queue.current().map(|t| t.id), Some(4));

        shuffle.disable(&mut queue);
        assert_eq!(queue.current().map(|t| t.id), Some(4));
        assert_eq!(queue.cursor(), Some(3));
    }

    #[test]
    fn reentrant_enable_does_not_recapture() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut queue = queue_of(&[1, 2, 3, 4, 5], 0);
        let original = ids(&queue);
        let mut shuffle = ShuffleState::new();

        shuffle.enable(&mut rng, &mut queue);
        let shuffled = ids(&queue);
        shuffle.enable(&mut rng, &mut queue);
        // second enable is a no-op: same view, same canonical
        assert_eq!(ids(&queue), shuffled);
        shuffle.disable(&mut queue);
        assert_eq!(ids(&queue), original);
    }

    #[test]
    fn single_element_queue_shuffles_as_noop() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut queue = queue_of(&[42], 0);
        let mut shuffle = ShuffleState::new();

        shuffle.enable(&mut rng, &mut queue);
        assert_eq!(ids(&queue), vec![42]);
        assert_eq!(queue.current().map(|t| t.id), Some(42));
        shuffle.disable(&mut queue);
        assert_eq!(ids(&queue), vec![42]);
    }

    #[test]
    fn load_while_shuffled_adopts_the_new_canonical() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut queue = queue_of(&[1, 2, 3], 0);
        let mut shuffle = ShuffleState::new();
        shuffle.enable(&mut rng, &mut queue);

        // a new queue arrives with shuffle still on, starting at id 30
        queue.load(vec![track(10), track(20), track(30), track(40)], 2);
        shuffle.recapture_for_load(&mut rng, &mut queue);

        // the cursor followed id 30 into the shuffled view
        assert_eq!(queue.current().map(|t| t.id), Some(30));

        // turning shuffle off restores the new list's order, not the old one
        shuffle.disable(&mut queue);
        assert_eq!(ids(&queue), vec![10, 20, 30, 40]);
        assert_eq!(queue.current().map(|t| t.id), Some(30));
    }

    #[test]
    fn permutation_preserves_track_multiset() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut queue = queue_of(&[1, 2, 3, 4, 5, 6, 7], 0);
        let mut shuffle = ShuffleState::new();
        shuffle.enable(&mut rng, &mut queue);

        let mut shuffled = ids(&queue);
        shuffled.sort_unstable();
        assert_eq!(shuffled, vec![1, 2, 3, 4, 5, 6, 7]);
    }
}
