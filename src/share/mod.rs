mod carousel;
mod provider;
mod swipe;
mod text;

pub use carousel::{ShareCarousel, ShareOutcome, ShareableScreen, dispatch_share};
pub use provider::{LogShareProvider, ShareProvider, ShareRequest};
pub use swipe::{DEFAULT_SWIPE_THRESHOLD, SwipeDirection, SwipeTracker};
pub use text::{SHARE_TITLE_FALLBACK, share_text};
