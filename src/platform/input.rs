//! Input gating
//!
//! Device events arrive as press/release pairs, and held keys auto-repeat.
//! The game only understands discrete activations, so each source must be
//! released before it can activate again.

/// Physical input sources that can activate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard,
    Pointer,
    Touch,
}

impl InputSource {
    const ALL: [InputSource; 3] = [InputSource::Keyboard, InputSource::Pointer, InputSource::Touch];

    fn index(self) -> usize {
        match self {
            InputSource::Keyboard => 0,
            InputSource::Pointer => 1,
            InputSource::Touch => 2,
        }
    }
}

/// Collapses held/auto-repeating presses into single activations
#[derive(Debug, Clone, Default)]
pub struct InputGate {
    held: [bool; 3],
}

impl InputGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press. Returns true only for the first press since the last
    /// release of this source (auto-repeat returns false).
    pub fn press(&mut self, source: InputSource) -> bool {
        let held = &mut self.held[source.index()];
        if *held {
            return false;
        }
        *held = true;
        true
    }

    pub fn release(&mut self, source: InputSource) {
        self.held[source.index()] = false;
    }

    /// Forget every held source (call on focus loss so a key released while
    /// unfocused does not stay stuck)
    pub fn reset_held_state(&mut self) {
        if self.any_held() {
            log::debug!("Clearing held input state");
        }
        self.held = [false; 3];
    }

    pub fn is_held(&self, source: InputSource) -> bool {
        self.held[source.index()]
    }

    pub fn any_held(&self) -> bool {
        InputSource::ALL.iter().any(|s| self.is_held(*s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_repeat_is_suppressed() {
        let mut gate = InputGate::new();
        assert!(gate.press(InputSource::Keyboard));
        assert!(!gate.press(InputSource::Keyboard));
        assert!(!gate.press(InputSource::Keyboard));
        gate.release(InputSource::Keyboard);
        assert!(gate.press(InputSource::Keyboard));
    }

    #[test]
    fn test_sources_are_independent() {
        let mut gate = InputGate::new();
        assert!(gate.press(InputSource::Keyboard));
        assert!(gate.press(InputSource::Touch));
        assert!(gate.press(InputSource::Pointer));
        assert!(!gate.press(InputSource::Touch));
    }

    #[test]
    fn test_focus_loss_clears_held_keys() {
        let mut gate = InputGate::new();
        gate.press(InputSource::Keyboard);
        gate.press(InputSource::Pointer);
        assert!(gate.any_held());

        gate.reset_held_state();
        assert!(!gate.any_held());
        assert!(gate.press(InputSource::Keyboard));
    }
}
