//! quizprint-export
//!
//! LaTeX-to-Unicode text transformation, print-ready HTML assembly from the
//! quiz tree, and the PDF renderer seam.

pub mod assemble;
pub mod error;
pub mod latex;
pub mod markup;
pub mod pdf;
pub mod render;
pub mod styles;
