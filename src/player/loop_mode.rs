use serde::{Deserialize, Serialize};

/// Loop policy for queue traversal. Only the user's toggle mutates this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoopMode {
    #[default]
    Off,
    All,
    One,
}

impl LoopMode {
    pub fn cycle(self) -> Self {
        match self {
            LoopMode::Off => LoopMode::All,
            LoopMode::All => LoopMode::One,
            LoopMode::One => LoopMode::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_off_all_one_off() {
        let mode = LoopMode::Off;
        let mode = mode.cycle();
        assert_eq!(mode, LoopMode::All);
        let mode = mode.cycle();
        assert_eq!(mode, LoopMode::One);
        let mode = mode.cycle();
        assert_eq!(mode, LoopMode::Off);
    }
}
