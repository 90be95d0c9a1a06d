pub mod chart;
pub mod classify;
pub mod feedback;
pub mod resolver;
