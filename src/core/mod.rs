pub mod card;
pub mod events;
pub mod session;

pub use card::{Card, CardId, GameStatus};
pub use events::{EventLogger, GameEvent, GameEventHandler, GameEventType};
pub use session::{GameSession, Resolution, ResolutionKind, SelectOutcome};
