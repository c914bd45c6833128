use crate::api::models::Track;

/// Where a queue comes from, resolved exactly once at play time.
///
/// `Explicit` is a track array handed over by a view ("play this album from
/// index 2"). `Scanned` is the fallback for a lone card clicked outside any
/// play-all context: the active view section is walked for track cards in
/// document order. The two are mutually exclusive, last-write-wins.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueSource {
    Explicit {
        tracks: Vec<Track>,
        start_index: usize,
    },
    Scanned {
        selector: String,
        clicked: Track,
    },
}

/// De-duplicate by track id, first occurrence wins, preserving order.
fn dedup_by_id(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = Vec::with_capacity(tracks.len());
    let mut out = Vec::with_capacity(tracks.len());
    for track in tracks {
        if seen.contains(&track.id) {
            continue;
        }
        seen.push(track.id);
        out.push(track);
    }
    out
}

impl QueueSource {
    /// Resolve into `(tracks, start_index)`. `scan` walks the DOM for the
    /// `Scanned` variant; it is never invoked for explicit queues. Returns
    /// `None` only for an empty explicit list (a caller contract breach;
    /// views guard against it). A scan that comes back empty, or that does
    /// not contain the clicked card, degrades to a single-track queue.
    pub fn resolve(self, scan: impl FnOnce(&str) -> Vec<Track>) -> Option<(Vec<Track>, usize)> {
        match self {
            QueueSource::Explicit {
                tracks,
                start_index,
            } => {
                debug_assert!(!tracks.is_empty(), "explicit queue source must be non-empty");
                if tracks.is_empty() {
                    return None;
                }
                Some((tracks, start_index))
            }
            QueueSource::Scanned { selector, clicked } => {
                let scanned = dedup_by_id(scan(&selector));
                match scanned.iter().position(|t| t.id == clicked.id) {
                    Some(start_index) => Some((scanned, start_index)),
                    None => Some((vec![clicked], 0)),
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
            audio_url: Some(format!("/audio/{id}.mp3")),
            ..Default::default()
        }
    }

    #[test]
    fn explicit_source_passes_through() {
        let source = QueueSource::Explicit {
            tracks: vec![track(1), track(2)],
            start_index: 1,
        };
        let (tracks, start) = source.resolve(|_| unreachable!()).unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(start, 1);
    }

    #[test]
    fn scanned_source_dedups_and_starts_at_clicked_card() {
        let source = QueueSource::Scanned {
            selector: "#view-home".to_string(),
            clicked: track(2),
        };
        let (tracks, start) = source
            .resolve(|selector| {
                assert_eq!(selector, "#view-home");
                vec![track(1), track(2), track(1), track(3), track(2)]
            })
            .unwrap();
        let ids: Vec<u64> = tracks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(start, 1);
    }

    #[test]
    fn empty_scan_falls_back_to_the_clicked_track() {
        let source = QueueSource::Scanned {
            selector: "#view-home".to_string(),
            clicked: track(8),
        };
        let (tracks, start) = source.resolve(|_| Vec::new()).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, 8);
        assert_eq!(start, 0);
    }

    #[test]
    fn scan_missing_the_clicked_card_falls_back_too() {
        let source = QueueSource::Scanned {
            selector: "#view-home".to_string(),
            clicked: track(8),
        };
        let (tracks, start) = source.resolve(|_| vec![track(1), track(2)]).unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].id, 8);
        assert_eq!(start, 0);
    }
}
