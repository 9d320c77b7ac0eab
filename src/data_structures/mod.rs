pub mod round_queue;

pub use round_queue::{QueueEntry, RoundQueue};
