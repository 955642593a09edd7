pub mod model;

pub use model::Member;
