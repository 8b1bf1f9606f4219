/// Decides whether a scroll-end signal is close enough to the end of the list
/// to ask for more books.
#[derive(Clone, Copy, Debug)]
pub struct ScrollThreshold {
    // Percent of the loaded items
    floor_percent: usize,
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self { floor_percent: 80 }
    }
}

impl ScrollThreshold {
    // count >= floor(count * 0.8) holds for any count, so this only filters out
    // empty lists: the phase guard in the books model does the rest.
    pub fn should_trigger(&self, count: usize) -> bool {
        let offset_threshold = count * self.floor_percent / 100;
        count > 0 && count >= offset_threshold
    }
}
