pub mod id;
pub mod tag;

pub use id::Id;
pub use tag::Tag;
