//! Application state for the letters API

use letters_core::LetterGenerator;

pub struct AppState {
    pub generator: LetterGenerator,
}

impl AppState {
    pub fn new(generator: LetterGenerator) -> Self {
        Self { generator }
    }
}
