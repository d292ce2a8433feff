pub mod interaction;
pub mod pointer;

pub use interaction::{InteractionState, CLICK_COUNT_KEY, LAST_CLICKED_KEY};
pub use pointer::PointerSampler;
