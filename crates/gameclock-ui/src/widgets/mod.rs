pub mod flex;
pub mod text;
