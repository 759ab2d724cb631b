use std::collections::HashSet;

use thiserror::Error;

use crate::model::{Exercise, PartId, WordPart};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons an assembly intent was refused. State is never modified when one
/// of these is returned, so callers are free to ignore them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssemblyError {
    #[error("word part `{0}` does not belong to this exercise")]
    UnknownPart(PartId),

    #[error("word part `{0}` is already placed")]
    PartInUse(PartId),

    #[error("slot {index} is out of range (slot count {count})")]
    SlotOutOfRange { index: usize, count: usize },

    #[error("no drag in progress")]
    NoPendingDrag,

    #[error("nothing placed to check")]
    NothingPlaced,
}

//
// ─── OUTCOMES ──────────────────────────────────────────────────────────────────
//

/// Result of a successful placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub slot: usize,
    pub part: PartId,
    /// Part that previously occupied the slot and is available again.
    pub displaced: Option<PartId>,
}

/// Result of checking the assembled sentence against the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub correct: bool,
    /// The learner's sentence as compared (slot words joined by spaces, trimmed).
    pub attempt: String,
    /// The literal target sentence.
    pub expected: String,
}

//
// ─── SLOT ASSEMBLY ─────────────────────────────────────────────────────────────
//

/// Per-exercise assembly area: a fixed row of slots filled from the
/// exercise's word pool.
///
/// The `used` set is kept in lockstep with `slots`: a part id is in `used`
/// exactly when one slot holds it.
#[derive(Debug, Clone)]
pub struct SlotAssembly {
    exercise: Exercise,
    slots: Vec<Option<PartId>>,
    used: HashSet<PartId>,
    pending: Option<PartId>,
    feedback: Option<Evaluation>,
}

impl SlotAssembly {
    #[must_use]
    pub fn new(exercise: Exercise, slot_count: usize) -> Self {
        Self {
            exercise,
            slots: vec![None; slot_count],
            used: HashSet::new(),
            pending: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn exercise(&self) -> &Exercise {
        &self.exercise
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Contents of every slot, in order.
    pub fn slots(&self) -> impl Iterator<Item = Option<&WordPart>> + '_ {
        self.slots
            .iter()
            .map(|slot| slot.as_ref().and_then(|id| self.exercise.part(id)))
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&WordPart> {
        self.slots
            .get(index)
            .and_then(Option::as_ref)
            .and_then(|id| self.exercise.part(id))
    }

    /// Parts of the pool that are not currently placed, in pool order.
    pub fn available_parts(&self) -> impl Iterator<Item = &WordPart> + '_ {
        self.exercise
            .parts()
            .iter()
            .filter(|part| !self.used.contains(part.id()))
    }

    #[must_use]
    pub fn is_used(&self, id: &PartId) -> bool {
        self.used.contains(id)
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.used.len()
    }

    /// Whether `evaluate` would be accepted.
    #[must_use]
    pub fn can_check(&self) -> bool {
        !self.used.is_empty()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&Evaluation> {
        self.feedback.as_ref()
    }

    #[must_use]
    pub fn pending_part(&self) -> Option<&PartId> {
        self.pending.as_ref()
    }

    /// Places `part_id` into `slot`, displacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::SlotOutOfRange`, `AssemblyError::UnknownPart` or
    /// `AssemblyError::PartInUse`; the assembly is left untouched in each case.
    pub fn place(&mut self, part_id: &PartId, slot: usize) -> Result<Placement, AssemblyError> {
        self.check_available(part_id)?;
        let count = self.slots.len();
        let cell = self
            .slots
            .get_mut(slot)
            .ok_or(AssemblyError::SlotOutOfRange { index: slot, count })?;

        let displaced = cell.replace(part_id.clone());
        if let Some(previous) = &displaced {
            self.used.remove(previous);
        }
        self.used.insert(part_id.clone());

        Ok(Placement {
            slot,
            part: part_id.clone(),
            displaced,
        })
    }

    /// Empties `slot`, returning the freed part. No-op for empty or
    /// out-of-range slots.
    pub fn clear(&mut self, slot: usize) -> Option<PartId> {
        let freed = self.slots.get_mut(slot)?.take()?;
        self.used.remove(&freed);
        Some(freed)
    }

    /// Checks the assembled sentence and records the result as feedback.
    ///
    /// Empty slots contribute an empty word, so a gap between placed words
    /// leaves a double space that does not match the target.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NothingPlaced` when every slot is empty.
    pub fn evaluate(&mut self) -> Result<Evaluation, AssemblyError> {
        if !self.can_check() {
            return Err(AssemblyError::NothingPlaced);
        }

        let attempt = self
            .slots()
            .map(|part| part.map_or("", WordPart::word))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_owned();
        let expected = self.exercise.target_sentence().to_owned();
        let correct = attempt.to_lowercase() == expected.to_lowercase();

        let evaluation = Evaluation {
            correct,
            attempt,
            expected,
        };
        self.feedback = Some(evaluation.clone());
        Ok(evaluation)
    }

    /// Empties every slot and clears feedback and any pending drag.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.used.clear();
        self.pending = None;
        self.feedback = None;
    }

    // ─── Drag protocol ────────────────────────────────────────────────────────

    /// Records an intended transfer of `part_id`.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::UnknownPart` or `AssemblyError::PartInUse`.
    pub fn drag_start(&mut self, part_id: &PartId) -> Result<(), AssemblyError> {
        self.check_available(part_id)?;
        self.pending = Some(part_id.clone());
        Ok(())
    }

    /// Completes a transfer carrying `part_id` onto `slot`.
    ///
    /// The pending intent is consumed whether or not the drop is accepted.
    ///
    /// # Errors
    ///
    /// Same as [`SlotAssembly::place`].
    pub fn drop(&mut self, part_id: &PartId, slot: usize) -> Result<Placement, AssemblyError> {
        self.pending = None;
        self.place(part_id, slot)
    }

    /// Completes the transfer recorded by `drag_start`.
    ///
    /// # Errors
    ///
    /// Returns `AssemblyError::NoPendingDrag` when nothing was picked up,
    /// otherwise the same errors as [`SlotAssembly::place`].
    pub fn drop_pending(&mut self, slot: usize) -> Result<Placement, AssemblyError> {
        let part_id = self.pending.take().ok_or(AssemblyError::NoPendingDrag)?;
        self.place(&part_id, slot)
    }

    pub fn cancel_drag(&mut self) {
        self.pending = None;
    }

    fn check_available(&self, part_id: &PartId) -> Result<(), AssemblyError> {
        if self.exercise.part(part_id).is_none() {
            return Err(AssemblyError::UnknownPart(part_id.clone()));
        }
        if self.used.contains(part_id) {
            return Err(AssemblyError::PartInUse(part_id.clone()));
        }
        Ok(())
    }
}
