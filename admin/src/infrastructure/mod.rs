pub mod output;
pub mod presenter;
