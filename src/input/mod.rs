mod helper;
pub mod history;

pub use helper::ShellHelper;
pub use history::HistorySource;
