use super::App;

impl App {
    pub fn next_word(&mut self) {
        self.index = (self.index + 1) % self.words.len();
        self.show_current();
    }

    pub fn prev_word(&mut self) {
        self.index = self.index.checked_sub(1).unwrap_or(self.words.len() - 1);
        self.show_current();
    }

    pub fn goto_word(&mut self, index: usize) {
        if index < self.words.len() {
            self.index = index;
            self.show_current();
        }
    }
}
