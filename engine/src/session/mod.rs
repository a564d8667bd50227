mod broadcaster;
#[allow(clippy::module_inception)]
mod session;
mod turn_loop;

pub use broadcaster::{GameBroadcaster, HumanInput, MoveInput};
pub use session::{Session, SessionSettings};
pub use turn_loop::{GameEnd, GameMode, Seat, TurnLoop};
