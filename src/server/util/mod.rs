pub mod normalize;
pub mod parse;
