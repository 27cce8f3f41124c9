pub mod execute;
pub mod movegen;
pub mod square_control;
pub mod types;
