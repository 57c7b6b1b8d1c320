pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::SomoError;
pub use models::{ Deck, FlashCard, GradeLevel, StudyContext, Turn, TurnOrigin, SUBJECTS };
