//! Frame counter driving the processing spinner.

/// Animation controller advanced once per event-loop tick
pub struct AnimationController {
    frame: usize,
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl AnimationController {
    pub fn new() -> Self {
        Self { frame: 0 }
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Braille spinner character for the current frame
    pub fn spinner_char(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}
