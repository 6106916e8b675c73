//! Drag-to-advance controller for the result card stack.
//!
//! [`SwipeGesture`] turns raw pointer/touch x coordinates into a drag offset
//! and, on release, an optional [`SwipeDirection`]. [`CardDeck`] owns the
//! active card index and the stacking/progress values derived from it.
//! Neither type touches the DOM; the view layer feeds coordinates in and
//! reads styles out.

mod deck;
mod gesture;

pub use deck::CardDeck;
pub use gesture::{CardTransform, SwipeDirection, SwipeGesture, SWIPE_THRESHOLD};
