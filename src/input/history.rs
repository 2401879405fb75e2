use rustyline::history::FileHistory;

/// Read-only view over the line editor's history store.
pub trait HistorySource {
    /// Number given to the oldest entry.
    fn base(&self) -> usize {
        1
    }

    fn entries(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}

impl HistorySource for FileHistory {
    fn entries(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl HistorySource for [String] {
    fn entries(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.iter().map(String::as_str))
    }
}

impl HistorySource for Vec<String> {
    fn entries(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        self.as_slice().entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustyline::history::History;

    #[test]
    fn test_file_history_in_order() {
        let mut history = FileHistory::new();
        history.add("ls").unwrap();
        history.add("cd /tmp").unwrap();

        let lines: Vec<&str> = history.entries().collect();
        assert_eq!(lines, vec!["ls", "cd /tmp"]);
        assert_eq!(history.base(), 1);
    }

    #[test]
    fn test_vec_history() {
        let history: Vec<String> = Vec::new();
        assert_eq!(history.entries().count(), 0);
    }
}
