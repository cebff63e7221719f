pub mod direction;
pub mod error;
pub mod piece;
pub mod square;

pub mod emit;
pub mod reach;
pub mod symbolic;
pub mod table;

mod helper;
