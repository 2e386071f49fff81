pub mod basic;
pub mod decode;
