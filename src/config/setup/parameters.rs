pub mod field;
pub mod simulation;
