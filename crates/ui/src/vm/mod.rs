mod quiz_vm;
mod wallet_vm;

pub use quiz_vm::{
    OptionState, OptionVm, QuestionVm, QuizPhase, QuizVm, SummaryVm, VerdictVm,
};
pub use wallet_vm::{LevelVm, map_level};
