pub mod category;
pub mod question;

pub use category::{Category, Chapter};
pub use question::{Question, SimilarQuestion};
