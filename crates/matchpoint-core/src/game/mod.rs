pub mod serialization;
pub mod sheet;
pub mod submit;
