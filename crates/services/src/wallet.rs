//! The decorative piggy-bank wallet.
//!
//! Nothing here talks to a real wallet. A [`BalanceSource`] stands in
//! for whatever would provide a balance (a connector library in a real
//! deployment); the shipped [`SimulatedPiggy`] just makes up numbers so
//! the savings adventure has something to show.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::Clock;

/// Provides an opening balance on connect and occasional increments
/// afterwards.
///
/// The wallet drives `tick` from a UI timer; a source returns `None`
/// when nothing arrived on that tick.
pub trait BalanceSource {
    fn opening_balance(&mut self) -> u64;
    fn tick(&mut self) -> Option<u64>;
}

/// The randomized stand-in source.
///
/// Opening balance is 100..=4999 sats; each tick has roughly a 30%
/// chance of dropping 10..=99 sats into the piggy.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedPiggy;

impl SimulatedPiggy {
    const OPENING_MIN: u64 = 100;
    const OPENING_MAX: u64 = 4_999;
    const TICK_CHANCE: f64 = 0.3;
    const INCREMENT_MIN: u64 = 10;
    const INCREMENT_MAX: u64 = 99;
}

impl BalanceSource for SimulatedPiggy {
    fn opening_balance(&mut self) -> u64 {
        rand::rng().random_range(Self::OPENING_MIN..=Self::OPENING_MAX)
    }

    fn tick(&mut self) -> Option<u64> {
        let mut rng = rand::rng();
        if rng.random_bool(Self::TICK_CHANCE) {
            Some(rng.random_range(Self::INCREMENT_MIN..=Self::INCREMENT_MAX))
        } else {
            None
        }
    }
}

/// Connection state of the piggy widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletState {
    Disconnected,
    Connecting,
    Connected {
        balance: u64,
        connected_at: DateTime<Utc>,
    },
}

/// State machine for the simulated wallet connection.
///
/// All transitions are synchronous; the connecting delay and the
/// periodic ticks are driven by UI timers. Out-of-order calls are
/// ignored rather than surfaced, the widget is decorative.
pub struct Wallet<S = SimulatedPiggy> {
    source: S,
    clock: Clock,
    state: WalletState,
}

impl Wallet<SimulatedPiggy> {
    /// A wallet backed by the randomized simulator.
    #[must_use]
    pub fn simulated(clock: Clock) -> Self {
        Self::new(SimulatedPiggy, clock)
    }
}

impl<S: BalanceSource> Wallet<S> {
    #[must_use]
    pub fn new(source: S, clock: Clock) -> Self {
        Self {
            source,
            clock,
            state: WalletState::Disconnected,
        }
    }

    #[must_use]
    pub fn state(&self) -> WalletState {
        self.state
    }

    /// Current balance in sats; 0 unless connected.
    #[must_use]
    pub fn balance(&self) -> u64 {
        match self.state {
            WalletState::Connected { balance, .. } => balance,
            WalletState::Disconnected | WalletState::Connecting => 0,
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        matches!(self.state, WalletState::Connected { .. })
    }

    #[must_use]
    pub fn is_connecting(&self) -> bool {
        matches!(self.state, WalletState::Connecting)
    }

    /// Start connecting. Only valid from `Disconnected`.
    pub fn begin_connect(&mut self) {
        if self.state != WalletState::Disconnected {
            debug!(state = ?self.state, "ignoring begin_connect");
            return;
        }
        self.state = WalletState::Connecting;
    }

    /// Finish connecting and obtain the opening balance.
    ///
    /// Called by the UI after its connection-delay timer; ignored unless
    /// currently `Connecting`.
    pub fn complete_connect(&mut self) {
        if self.state != WalletState::Connecting {
            debug!(state = ?self.state, "ignoring complete_connect");
            return;
        }
        let balance = self.source.opening_balance();
        self.state = WalletState::Connected {
            balance,
            connected_at: self.clock.now(),
        };
        debug!(balance, "piggy connected");
    }

    /// Abort a pending connection or drop an established one.
    pub fn disconnect(&mut self) {
        self.state = WalletState::Disconnected;
    }

    /// Apply one timer tick while connected.
    ///
    /// Returns the new balance when something arrived, `None` otherwise
    /// (including when not connected).
    pub fn tick(&mut self) -> Option<u64> {
        let WalletState::Connected { balance, connected_at } = self.state else {
            return None;
        };

        let increment = self.source.tick()?;
        let balance = balance.saturating_add(increment);
        self.state = WalletState::Connected {
            balance,
            connected_at,
        };
        Some(balance)
    }
}

#[cfg(test)]
mod tests {
    use bitkids_core::time::{fixed_clock, fixed_now};

    use super::*;

    /// A source that plays back a fixed script of increments.
    struct Scripted {
        opening: u64,
        increments: Vec<Option<u64>>,
    }

    impl BalanceSource for Scripted {
        fn opening_balance(&mut self) -> u64 {
            self.opening
        }

        fn tick(&mut self) -> Option<u64> {
            if self.increments.is_empty() {
                None
            } else {
                self.increments.remove(0)
            }
        }
    }

    #[test]
    fn connect_flow_reaches_connected_with_opening_balance() {
        let source = Scripted {
            opening: 1_234,
            increments: vec![],
        };
        let mut wallet = Wallet::new(source, fixed_clock());
        assert_eq!(wallet.balance(), 0);

        wallet.begin_connect();
        assert!(wallet.is_connecting());
        assert_eq!(wallet.balance(), 0);

        wallet.complete_connect();
        assert!(wallet.is_connected());
        assert_eq!(wallet.balance(), 1_234);
        assert_eq!(
            wallet.state(),
            WalletState::Connected {
                balance: 1_234,
                connected_at: fixed_now(),
            }
        );
    }

    #[test]
    fn ticks_accumulate_and_quiet_ticks_change_nothing() {
        let source = Scripted {
            opening: 100,
            increments: vec![Some(10), None, Some(25)],
        };
        let mut wallet = Wallet::new(source, fixed_clock());
        wallet.begin_connect();
        wallet.complete_connect();

        assert_eq!(wallet.tick(), Some(110));
        assert_eq!(wallet.tick(), None);
        assert_eq!(wallet.balance(), 110);
        assert_eq!(wallet.tick(), Some(135));
    }

    #[test]
    fn disconnect_resets_the_balance() {
        let source = Scripted {
            opening: 500,
            increments: vec![],
        };
        let mut wallet = Wallet::new(source, fixed_clock());
        wallet.begin_connect();
        wallet.complete_connect();
        wallet.disconnect();

        assert_eq!(wallet.state(), WalletState::Disconnected);
        assert_eq!(wallet.balance(), 0);
        assert_eq!(wallet.tick(), None);
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let source = Scripted {
            opening: 500,
            increments: vec![],
        };
        let mut wallet = Wallet::new(source, fixed_clock());

        // Completing without a pending connection does nothing.
        wallet.complete_connect();
        assert_eq!(wallet.state(), WalletState::Disconnected);

        wallet.begin_connect();
        wallet.begin_connect();
        wallet.complete_connect();
        let balance = wallet.balance();

        // A second begin/complete must not reroll the balance.
        wallet.begin_connect();
        wallet.complete_connect();
        assert_eq!(wallet.balance(), balance);
    }

    #[test]
    fn simulated_source_stays_in_documented_ranges() {
        let mut source = SimulatedPiggy;
        for _ in 0..100 {
            let opening = source.opening_balance();
            assert!((100..=4_999).contains(&opening));
            if let Some(increment) = source.tick() {
                assert!((10..=99).contains(&increment));
            }
        }
    }
}
