mod html_vm;
mod quiz_vm;

pub use html_vm::{plain_text, sanitize_html};
pub use quiz_vm::{
    AMOUNT_OPTIONS, AnswerVm, QuestionVm, QuizStatusVm, QuizVm, amount_options, map_quiz,
};
