pub mod clock;
pub mod date_range;
pub mod engine;
pub mod memo;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date_range::DateWindow;
pub use engine::{filter_records, RecordFilterEngine};
pub use memo::MemoizedFilter;
