//! Error types for slot activation and registry operations.

use std::fmt;

use crate::editor::BlockId;

/// Rejected placeholder activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotError {
    /// Symbol slots are reserved but not implemented yet.
    SymbolUnsupported,
    /// The slot already holds a nested rule block.
    Occupied,
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::SymbolUnsupported => {
                write!(f, "symbol placeholders are not supported")
            }
            SlotError::Occupied => write!(f, "placeholder already holds a rule"),
        }
    }
}

impl std::error::Error for SlotError {}

/// Rejected registry operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// The referenced block id is not in the registry.
    UnknownBlock(BlockId),
    /// A block cannot be connected beneath itself.
    SelfConnection(BlockId),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::UnknownBlock(id) => write!(f, "block {id} is not registered"),
            EditorError::SelfConnection(id) => {
                write!(f, "block {id} cannot be connected to itself")
            }
        }
    }
}

impl std::error::Error for EditorError {}
