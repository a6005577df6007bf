mod amount;
mod question;
mod session;

pub use amount::{AmountError, QuestionAmount};
pub use question::{Question, QuestionRepository, RawQuestion};
pub use session::{Page, Progress, SessionScope, SessionToken};
