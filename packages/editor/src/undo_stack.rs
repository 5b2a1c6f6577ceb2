//! # Undo/Redo Stack
//!
//! Tracks mutation history and enables undo/redo operations.
//!
//! ## Design
//!
//! - Each mutation records its inverse before being applied
//! - Undo applies the inverse and moves mutation to redo stack
//! - Redo reapplies the original mutation
//! - New mutations clear the redo stack
//! - Supports batched operations (a whole drag gesture is one undo step)
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let mut forest = Forest::new();
//!
//! let mutation = Mutation::AddElement { element_type: ElementType::Text };
//! forest = stack.apply(&mutation, &forest).unwrap().forest;
//!
//! forest = stack.undo(&forest).unwrap();
//! forest = stack.redo(&forest).unwrap();
//! ```

use crate::forest::Forest;
use crate::mutations::{Applied, Mutation};

/// A group of mutations that should be undone/redone together
#[derive(Debug, Clone)]
pub struct MutationBatch {
    /// The mutations in this batch (in application order)
    pub mutations: Vec<Mutation>,

    /// The inverse mutations (in reverse order for undo)
    pub inverses: Vec<Mutation>,

    /// Optional description of this batch
    pub description: Option<String>,
}

impl MutationBatch {
    /// Create a single-mutation batch
    pub fn single(mutation: Mutation, inverses: Vec<Mutation>) -> Self {
        Self {
            mutations: vec![mutation],
            inverses,
            description: None,
        }
    }
}

/// Undo/redo stack for forest editing
#[derive(Debug)]
pub struct UndoStack {
    /// Stack of applied mutations (most recent last)
    undo_stack: Vec<MutationBatch>,

    /// Stack of undone mutations (most recent last)
    redo_stack: Vec<MutationBatch>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,

    /// Currently building a batch
    current_batch: Option<MutationBatch>,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    /// Create an undo stack with custom max levels
    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
            current_batch: None,
        }
    }

    /// Apply a mutation and record it for undo.
    ///
    /// Returns `None` (and records nothing) when the mutation is a no-op.
    pub fn apply(&mut self, mutation: &Mutation, forest: &Forest) -> Option<Applied> {
        // Generate inverse before applying
        let inverses = mutation.inverse(forest);
        let applied = mutation.apply(forest)?;

        self.record(mutation.clone(), inverses);
        Some(applied)
    }

    /// Record a mutation that was applied elsewhere, with its inverses
    pub fn record(&mut self, mutation: Mutation, inverses: Vec<Mutation>) {
        if let Some(batch) = &mut self.current_batch {
            batch.mutations.push(mutation);
            // Inverses go in reverse order
            batch.inverses.splice(0..0, inverses);
        } else {
            self.push_batch(MutationBatch::single(mutation, inverses));
        }
    }

    /// Start a batch of mutations (will be undone/redone together)
    pub fn begin_batch(&mut self) {
        self.current_batch = Some(MutationBatch {
            mutations: Vec::new(),
            inverses: Vec::new(),
            description: None,
        });
    }

    /// End the current batch and push to undo stack
    pub fn end_batch(&mut self) {
        if let Some(batch) = self.current_batch.take() {
            if !batch.mutations.is_empty() {
                self.push_batch(batch);
            }
        }
    }

    pub fn is_batching(&self) -> bool {
        self.current_batch.is_some()
    }

    /// Set description for current batch (if batching)
    pub fn set_batch_description(&mut self, description: impl Into<String>) {
        if let Some(batch) = &mut self.current_batch {
            batch.description = Some(description.into());
        }
    }

    /// Push a batch to the undo stack
    fn push_batch(&mut self, batch: MutationBatch) {
        self.undo_stack.push(batch);

        // Trim if exceeded max levels
        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // Clear redo stack (new action invalidates future)
        self.redo_stack.clear();
    }

    /// Undo the most recent batch, returning the restored forest
    pub fn undo(&mut self, forest: &Forest) -> Option<Forest> {
        self.end_batch();

        let batch = self.undo_stack.pop()?;
        let restored = replay(&batch.inverses, forest);
        self.redo_stack.push(batch);

        Some(restored)
    }

    /// Redo the most recently undone batch
    pub fn redo(&mut self, forest: &Forest) -> Option<Forest> {
        let batch = self.redo_stack.pop()?;
        let restored = replay(&batch.mutations, forest);
        self.undo_stack.push(batch);

        Some(restored)
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of undo levels available
    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    /// Get the number of redo levels available
    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    /// Get description of the next undo operation
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }

    /// Get description of the next redo operation
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|batch| batch.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

fn replay(mutations: &[Mutation], forest: &Forest) -> Forest {
    mutations.iter().fold(forest.clone(), |current, mutation| {
        match mutation.apply(&current) {
            Some(applied) => applied.forest,
            None => current,
        }
    })
}
