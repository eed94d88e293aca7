//! Draft-scope identifiers

use std::fmt;
use uuid::Uuid;

/// Identifier attached to an entity only while it is being drafted.
///
/// Options carry one inside the question editor and questions carry one
/// inside the quiz composer's list. Neither finalized questions nor
/// submitted quizzes contain any `DraftId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DraftId(Uuid);

impl DraftId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for DraftId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source of fresh draft identifiers.
///
/// Implementations must never hand out the same id twice over their
/// lifetime, so removed ids are never reused.
pub trait IdGenerator {
    fn next_id(&mut self) -> DraftId;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> DraftId {
        DraftId(Uuid::new_v4())
    }
}

/// Monotonic ids starting at 1, reproducible across runs
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> u128 {
        self.issued
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> DraftId {
        self.issued += 1;
        DraftId(Uuid::from_u128(self.issued))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequential_ids_are_monotonic() {
        let mut ids = SequentialIds::new();
        assert_eq!(ids.next_id(), DraftId::from_uuid(Uuid::from_u128(1)));
        assert_eq!(ids.next_id(), DraftId::from_uuid(Uuid::from_u128(2)));
        assert_eq!(ids.issued(), 2);
    }

    #[test]
    fn test_uuid_generator_does_not_repeat() {
        let mut ids = UuidGenerator;
        let seen: HashSet<DraftId> = (0..64).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 64);
    }

    #[test]
    fn test_display_matches_uuid() {
        let id = DraftId::from_uuid(Uuid::from_u128(7));
        assert_eq!(id.to_string(), Uuid::from_u128(7).to_string());
    }
}
