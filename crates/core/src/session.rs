//! Variant session state machine.
//!
//! A session groups the three candidate menus generated from one concept
//! prompt. Each slot progresses `idle -> generating -> {ready | error}`
//! independently; transitions are one-directional and guarded here so no
//! caller can move a slot backwards or out of a terminal state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::types::{MenuItem, Timestamp};

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Lowest variant slot number.
pub const SLOT_MIN: u8 = 1;
/// Highest variant slot number.
pub const SLOT_MAX: u8 = 3;
/// Number of variant slots in every session. Fixed, not runtime-extensible.
pub const SLOT_COUNT: usize = 3;

/// Validate that a slot number is within `1..=3`.
pub fn validate_slot(slot: u8) -> Result<(), CoreError> {
    if (SLOT_MIN..=SLOT_MAX).contains(&slot) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Variant slot must be between {SLOT_MIN} and {SLOT_MAX}, got {slot}"
        )))
    }
}

// ---------------------------------------------------------------------------
// Variant status
// ---------------------------------------------------------------------------

/// Lifecycle state of a single variant slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantStatus {
    /// Slot exists but no pipeline has been launched for it.
    Idle,
    /// A pipeline is running; content or image generation is in flight.
    Generating,
    /// Terminal: name, items, and image are all present.
    Ready,
    /// Terminal: the pipeline failed; an error detail is present.
    Error,
}

impl VariantStatus {
    /// Whether no further automatic transition can occur from this status.
    pub fn is_terminal(self) -> bool {
        matches!(self, VariantStatus::Ready | VariantStatus::Error)
    }
}

// ---------------------------------------------------------------------------
// Variant
// ---------------------------------------------------------------------------

/// One of the three independently generated candidate menus in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub status: VariantStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restaurant_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MenuItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Variant {
    /// Create an idle variant with no data.
    pub fn new() -> Self {
        Self {
            status: VariantStatus::Idle,
            restaurant_name: None,
            items: None,
            image_url: None,
            error: None,
        }
    }

    /// Transition `idle -> generating`.
    pub fn start_generating(&mut self) -> Result<(), CoreError> {
        if self.status != VariantStatus::Idle {
            return Err(CoreError::Conflict(format!(
                "Cannot start generating from status {:?}",
                self.status
            )));
        }
        self.status = VariantStatus::Generating;
        Ok(())
    }

    /// Transition `generating -> ready`, storing the generated menu.
    ///
    /// Enforces the ready invariant: a non-empty restaurant name, at least
    /// one item, and an image reference.
    pub fn complete(
        &mut self,
        restaurant_name: String,
        items: Vec<MenuItem>,
        image_url: String,
    ) -> Result<(), CoreError> {
        if self.status != VariantStatus::Generating {
            return Err(CoreError::Conflict(format!(
                "Cannot complete a variant in status {:?}",
                self.status
            )));
        }
        if restaurant_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "A ready variant must have a restaurant name".to_string(),
            ));
        }
        if items.is_empty() {
            return Err(CoreError::Validation(
                "A ready variant must have at least one menu item".to_string(),
            ));
        }
        if image_url.is_empty() {
            return Err(CoreError::Validation(
                "A ready variant must have an image reference".to_string(),
            ));
        }
        self.status = VariantStatus::Ready;
        self.restaurant_name = Some(restaurant_name);
        self.items = Some(items);
        self.image_url = Some(image_url);
        self.error = None;
        Ok(())
    }

    /// Transition `generating -> error`, recording the failure detail.
    ///
    /// An errored variant never carries an image reference.
    pub fn fail(&mut self, detail: String) -> Result<(), CoreError> {
        if self.status != VariantStatus::Generating {
            return Err(CoreError::Conflict(format!(
                "Cannot fail a variant in status {:?}",
                self.status
            )));
        }
        self.status = VariantStatus::Error;
        self.error = Some(detail);
        self.image_url = None;
        Ok(())
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Server-side record grouping the three variants of one generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Opaque session identifier, generated at creation.
    pub id: Uuid,
    /// When the session was created. Drives TTL eviction.
    pub created_at: Timestamp,
    /// The three variant slots, indexed `slot - 1`.
    pub variants: [Variant; SLOT_COUNT],
}

impl Session {
    /// Create a session with a fresh id and all slots idle.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            variants: [Variant::new(), Variant::new(), Variant::new()],
        }
    }

    /// Read a variant slot (`1..=3`).
    pub fn variant(&self, slot: u8) -> Result<&Variant, CoreError> {
        validate_slot(slot)?;
        Ok(&self.variants[(slot - 1) as usize])
    }

    /// Mutably borrow a variant slot (`1..=3`).
    pub fn variant_mut(&mut self, slot: u8) -> Result<&mut Variant, CoreError> {
        validate_slot(slot)?;
        Ok(&mut self.variants[(slot - 1) as usize])
    }

    /// True iff every slot has reached a terminal status.
    ///
    /// "All finished", not "all succeeded": a session with errored slots
    /// still reports true, which is what tells pollers to stop.
    pub fn all_ready(&self) -> bool {
        self.variants.iter().all(|v| v.status.is_terminal())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
