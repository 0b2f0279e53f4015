mod clock;
mod locator;
mod partition;

pub use clock::{Clock, FixedClock, SystemClock};
pub use locator::{FileLocator, MAX_WINDOW_DAYS, SearchSpec};
pub use partition::{partition_dir, sentinel_path};
