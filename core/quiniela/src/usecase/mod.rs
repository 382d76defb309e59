//! ユースケース（ポート経由でのみ外界に触れる）

pub mod agents;
pub mod place_bets;

pub use agents::AgentsUseCase;
pub use place_bets::{BetSubmission, PlaceBetsUseCase, PlaceError, PlacedTicket};
