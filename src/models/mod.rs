mod author;
mod order;
mod thought;

pub use author::{Tagged, split_author_tag};
pub use order::{Direction, Order, Sort, SortField};
pub use thought::{
    ANONYMOUS, MAX_MESSAGE_LEN, MAX_POSTED_BY_LEN, MIN_MESSAGE_LEN, NewThought, Thought,
    validate_message,
};
