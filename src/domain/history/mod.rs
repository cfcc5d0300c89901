pub mod table;

pub use table::{CommitRejected, HistoryTable};
