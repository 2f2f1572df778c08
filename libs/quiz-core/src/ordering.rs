//! Card ordering within a session.

/// Decides the order cards of a set are shown in.
///
/// The engine asks for a fresh sequence every time a set is selected and
/// every time a session wraps around.
pub trait CardOrdering: Send + Sync {
    /// Ordering identifier.
    fn name(&self) -> &'static str;

    /// A permutation of `0..card_count`.
    fn sequence(&self, card_count: usize) -> Vec<usize>;
}

/// Shows cards in the order they were loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialOrdering;

impl CardOrdering for SequentialOrdering {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn sequence(&self, card_count: usize) -> Vec<usize> {
        (0..card_count).collect()
    }
}

/// Get ordering by name.
pub fn get_ordering(name: &str) -> Option<Box<dyn CardOrdering>> {
    match name {
        "sequential" => Some(Box::new(SequentialOrdering)),
        _ => None,
    }
}
