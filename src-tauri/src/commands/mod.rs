pub mod matching;
pub mod settings;
pub mod upload;
pub mod view;
