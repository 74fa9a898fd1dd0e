//! # Truth Terminal Lore Engine
//!
//! The character's autonomous inner life: active obsessions, an episodic
//! memory buffer, and the hallucination guidance it operates under. The
//! buffer is owned by the caller and threaded through unchanged; growth
//! and eviction are an external concern.

use serde::Serialize;

use ngen_core::AutonomousCharacterSeed;

/// Category of one remembered event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemoryKind {
    /// A painful past event the character carries.
    Trauma,
    /// An observation about the world.
    Insight,
    /// A conclusion the character has drawn.
    Realization,
}

/// One entry of the episodic memory buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemoryEntry {
    pub kind: MemoryKind,
    pub text: String,
}

impl MemoryEntry {
    pub fn new(kind: MemoryKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The assembled lore engine block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoreEngine {
    /// Obsession topics, verbatim and in input order.
    pub active_obsessions: Vec<String>,
    /// Caller-supplied episodic memory, unchanged.
    pub memory_buffer: Vec<MemoryEntry>,
    /// The free-text hallucination permission, verbatim.
    pub hallucination_guidance: String,
}

/// Build the lore engine for a character seed.
pub fn build_lore_engine(
    character: &AutonomousCharacterSeed,
    memory_buffer: Vec<MemoryEntry>,
) -> LoreEngine {
    LoreEngine {
        active_obsessions: character.lore_seed.obsession_topics.clone(),
        memory_buffer,
        hallucination_guidance: character
            .evolution_parameters
            .hallucination_permission
            .clone(),
    }
}
