mod quiz_vm;

pub use quiz_vm::{
    ChoiceState, ChoiceVm, QuestionScreenVm, QuizIntent, QuizScreen, QuizVm, ResultsScreenVm,
};
