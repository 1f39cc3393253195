mod listing;

pub use listing::extract_content;
