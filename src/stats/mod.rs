mod summary;

pub use summary::{summarize, EmptyInput, Summary};
