pub mod hour;
pub mod playback;
pub mod ticker;
pub mod wall;

pub use hour::SimulatedHour;
pub use playback::{Generations, Playback};
pub use ticker::{Ticker, TickerHandle, TimerSlot};
pub use wall::{FixedClock, SystemClock, WallClock};
