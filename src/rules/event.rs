//! Structured turn log.
//!
//! Games can keep a record of everything that happened, one [`TurnEvent`]
//! per rule step. Single-game runs print it as a trace; batch runs leave it
//! switched off.

use serde::Serialize;

use super::die::DieFace;
use crate::board::ChanceCard;
use crate::core::{JailRelease, PlayerId};

/// One step of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TurnEvent {
    /// 1-based turn number.
    pub turn: u32,
    /// Player the event happened to.
    pub player: PlayerId,
    pub kind: EventKind,
}

/// What happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum EventKind {
    Rolled { face: DieFace },
    LeftJail { release: JailRelease },
    PassedGo { salary: i64 },
    Moved { square: usize, name: String },
    SentToJail { square: usize },
    Bought { square: String, cost: i64 },
    PaidRent { square: String, owner: PlayerId, amount: i64 },
    CollectedPartyBox { amount: i64 },
    DrewCard { card: ChanceCard },
    CollectedSalary { amount: i64 },
    PaidIntoPartyBox { amount: i64 },
    GotJailCard,
    Bankrupt { balance: i64 },
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Rolled { face } => write!(f, "rolled a {face}"),
            EventKind::LeftJail { release: JailRelease::Card } => {
                f.write_str("left jail using a get out of jail free card")
            }
            EventKind::LeftJail { release: JailRelease::Paid(fee) } => {
                write!(f, "paid {fee} to leave jail")
            }
            EventKind::PassedGo { salary } => write!(f, "passed Go and collected {salary}"),
            EventKind::Moved { square, name } => write!(f, "moved to {name} ({square})"),
            EventKind::SentToJail { square } => write!(f, "was sent to jail ({square})"),
            EventKind::Bought { square, cost } => write!(f, "bought {square} for {cost}"),
            EventKind::PaidRent { square, owner, amount } => {
                write!(f, "paid {amount} to {owner} for landing on {square}")
            }
            EventKind::CollectedPartyBox { amount } => {
                write!(f, "collected {amount} from the party box")
            }
            EventKind::DrewCard { card } => write!(f, "drew chance card {card}"),
            EventKind::CollectedSalary { amount } => write!(f, "collected {amount} at Go"),
            EventKind::PaidIntoPartyBox { amount } => write!(f, "paid {amount} into the party box"),
            EventKind::GotJailCard => f.write_str("kept a get out of jail free card"),
            EventKind::Bankrupt { balance } => write!(f, "is bankrupt with {balance}"),
        }
    }
}

impl std::fmt::Display for TurnEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[turn {}] {} {}", self.turn, self.player, self.kind)
    }
}
