use std::collections::VecDeque;

/// An entry of the [`RoundQueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueEntry {
    /// A vertex waiting to have its outgoing edges relaxed
    Vertex(usize),
    /// Closes the current relaxation round
    EndOfRound,
}

/// FIFO work queue for round-based relaxation (Yen's ordering)
///
/// Each vertex is present at most once at any time. Rounds are delimited by
/// [`QueueEntry::EndOfRound`] entries; the queue itself never decides when a
/// round ends, the caller pops the marker and asks for the next round.
#[derive(Debug)]
pub struct RoundQueue {
    /// Pending entries in FIFO order
    entries: VecDeque<QueueEntry>,

    /// in_queue[v] is true while `Vertex(v)` sits in `entries`
    in_queue: Vec<bool>,

    /// Number of rounds closed so far
    round: usize,
}

impl RoundQueue {
    /// Creates a queue over `vertex_count` vertices holding `[start, EndOfRound]`
    pub fn new(vertex_count: usize, start: usize) -> Self {
        let mut queue = RoundQueue {
            entries: VecDeque::with_capacity(vertex_count + 1),
            in_queue: vec![false; vertex_count],
            round: 0,
        };
        queue.push(start);
        queue.entries.push_back(QueueEntry::EndOfRound);
        queue
    }

    /// Enqueues a vertex unless it is already waiting. Returns true if it was added.
    pub fn push(&mut self, vertex: usize) -> bool {
        if self.in_queue[vertex] {
            return false;
        }
        self.in_queue[vertex] = true;
        self.entries.push_back(QueueEntry::Vertex(vertex));
        true
    }

    /// Removes the front entry, clearing the in-queue flag of a popped vertex
    pub fn pop(&mut self) -> Option<QueueEntry> {
        let entry = self.entries.pop_front()?;
        if let QueueEntry::Vertex(vertex) = entry {
            self.in_queue[vertex] = false;
        }
        Some(entry)
    }

    /// Counts one more finished round and returns the new round count.
    ///
    /// Does not enqueue the next marker; see [`RoundQueue::close_round`].
    pub fn advance_round(&mut self) -> usize {
        self.round += 1;
        self.round
    }

    /// Appends the marker that ends the round currently being filled
    pub fn close_round(&mut self) {
        self.entries.push_back(QueueEntry::EndOfRound);
    }

    /// Returns the number of finished rounds
    pub fn round(&self) -> usize {
        self.round
    }

    /// Returns true if the vertex is currently waiting in the queue
    pub fn contains(&self, vertex: usize) -> bool {
        self.in_queue[vertex]
    }

    /// Returns true if no entry (vertex or marker) is pending
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of pending entries, markers included
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
