use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub kills: u32,
    pub accuracy: f32,
    pub elapsed_secs: f64,
    pub timestamp: u64,
}

#[derive(Debug, Clone)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
    capacity: usize,
}

impl Default for Leaderboard {
    fn default() -> Self {
        Self::new(Self::CAPACITY)
    }
}

impl Leaderboard {
    pub const CAPACITY: usize = 10;

    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn record(&mut self, entry: ScoreEntry) -> Option<usize> {
        self.entries.push(entry);
        let inserted = self.entries.len() - 1;
        let mut order: Vec<usize> = (0..self.entries.len()).collect();
        order.sort_by(|&a, &b| self.entries[b].kills.cmp(&self.entries[a].kills));

        let rank = order.iter().position(|&i| i == inserted);
        let mut sorted: Vec<ScoreEntry> = order
            .into_iter()
            .map(|i| self.entries[i].clone())
            .collect();
        sorted.truncate(self.capacity);
        self.entries = sorted;

        rank.filter(|&r| r < self.capacity)
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, kills: u32) -> ScoreEntry {
        ScoreEntry {
            name: name.to_string(),
            kills,
            accuracy: 50.0,
            elapsed_secs: 30.0,
            timestamp: 0,
        }
    }

    #[test]
    fn keeps_top_ten_by_kills() {
        let mut board = Leaderboard::default();
        for kills in 0..12 {
            board.record(entry("p", kills));
        }

        assert_eq!(board.len(), 10);
        assert_eq!(board.best().unwrap().kills, 11);
        assert_eq!(board.entries().last().unwrap().kills, 2);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut board = Leaderboard::default();
        board.record(entry("first", 8));
        let rank = board.record(entry("second", 8));

        assert_eq!(rank, Some(1));
        assert_eq!(board.entries()[0].name, "first");
    }

    #[test]
    fn low_score_on_full_board_is_not_ranked() {
        let mut board = Leaderboard::new(2);
        board.record(entry("a", 5));
        board.record(entry("b", 4));

        assert_eq!(board.record(entry("c", 1)), None);
        assert_eq!(board.len(), 2);
    }
}
