mod facts;
mod home;
mod quiz;
mod wallet;

pub use facts::FactsView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use wallet::PiggyWallet;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
