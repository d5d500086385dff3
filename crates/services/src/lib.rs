#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod wallet;

pub use bitkids_core::Clock;

pub use error::QuizError;
pub use quiz::{
    AdvanceOutcome, CheckedAnswer, QuizProgress, QuizService, QuizSession, select_questions,
};
pub use wallet::{BalanceSource, SimulatedPiggy, Wallet, WalletState};
