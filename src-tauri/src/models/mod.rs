pub mod matching;
pub mod resume;
pub mod session;
