pub mod constants;
mod markup;
pub mod render;
