mod question;

pub use question::{CreateQuestion, Question};
