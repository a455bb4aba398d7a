mod card;
mod layout;
mod share_overlay;
mod status;

pub use card::{CardBody, CardView, draw_card};
pub use layout::{UiLayout, split_layout};
pub use share_overlay::draw_share_overlay;
pub use status::{DebugStats, draw_status};
