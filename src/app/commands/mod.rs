pub mod emit;
pub mod list;
pub mod verify;
