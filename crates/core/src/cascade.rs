//! Dependent option lists for the wizard's cascading selectors.
//!
//! Choosing a wheel count determines which vehicle types are offered, and
//! choosing a vehicle type determines which models are offered. Each of
//! those two lists lives in a [`CandidateList`] slot of the
//! [`OptionCascade`].
//!
//! Fetches are issued synchronously as a [`PendingFetch`] carrying a
//! [`RequestSeq`], awaited by the caller, and handed back as a
//! [`FetchCompletion`]. A completion is applied only if its sequence number
//! is still the latest one issued for its slot, so a slow response for a
//! superseded selection can never overwrite the list of a newer one.

use crate::collaborator::RentalCollaborator;
use crate::types::EntityId;
use crate::vehicle::{VehicleModel, VehicleType, WheelCount};

// ---------------------------------------------------------------------------
// Fetch results
// ---------------------------------------------------------------------------

/// Outcome of one option-list fetch. Never an error: a failed fetch is an
/// empty list plus a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult<T> {
    pub items: Vec<T>,
    pub failure: Option<String>,
}

impl<T> FetchResult<T> {
    fn loaded(items: Vec<T>) -> Self {
        Self {
            items,
            failure: None,
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            items: Vec::new(),
            failure: Some(reason),
        }
    }
}

/// Load the vehicle types offered for a wheel count, in API order.
pub async fn fetch_types_for_wheel_count<C: RentalCollaborator>(
    api: &C,
    wheels: WheelCount,
) -> FetchResult<VehicleType> {
    match api.vehicle_types(wheels).await {
        Ok(types) => FetchResult::loaded(types),
        Err(err) => {
            tracing::warn!(wheels = %wheels, error = %err, "Failed to load vehicle types");
            FetchResult::failed(format!("Failed to load vehicle types: {err}"))
        }
    }
}

/// Load the models belonging to a vehicle type, in API order.
pub async fn fetch_models_for_type<C: RentalCollaborator>(
    api: &C,
    type_id: &EntityId,
) -> FetchResult<VehicleModel> {
    match api.vehicles(type_id).await {
        Ok(models) => FetchResult::loaded(models),
        Err(err) => {
            tracing::warn!(type_id = %type_id, error = %err, "Failed to load vehicle models");
            FetchResult::failed(format!("Failed to load vehicle models: {err}"))
        }
    }
}

// ---------------------------------------------------------------------------
// Request sequencing
// ---------------------------------------------------------------------------

/// Monotonically increasing number assigned to every issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(u64);

impl RequestSeq {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// The two dependent lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeSlot {
    VehicleTypes,
    VehicleModels,
}

/// Load state of a candidate list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// Nothing requested since the last invalidation.
    Empty,
    /// A fetch is in flight.
    Loading,
    Loaded,
    /// The latest fetch failed; the list is empty.
    Failed,
}

/// A fetch that has been issued but not yet performed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending fetch does nothing until it is run and completed"]
pub enum PendingFetch {
    VehicleTypes { seq: RequestSeq, wheels: WheelCount },
    VehicleModels { seq: RequestSeq, type_id: EntityId },
}

impl PendingFetch {
    pub fn seq(&self) -> RequestSeq {
        match self {
            Self::VehicleTypes { seq, .. } | Self::VehicleModels { seq, .. } => *seq,
        }
    }

    pub fn slot(&self) -> CascadeSlot {
        match self {
            Self::VehicleTypes { .. } => CascadeSlot::VehicleTypes,
            Self::VehicleModels { .. } => CascadeSlot::VehicleModels,
        }
    }

    /// Perform the network call. The returned completion still has to be
    /// handed to [`OptionCascade::apply`] (usually via the wizard controller).
    pub async fn run<C: RentalCollaborator>(self, api: &C) -> FetchCompletion {
        match self {
            Self::VehicleTypes { seq, wheels } => FetchCompletion::VehicleTypes {
                seq,
                result: fetch_types_for_wheel_count(api, wheels).await,
            },
            Self::VehicleModels { seq, type_id } => FetchCompletion::VehicleModels {
                seq,
                result: fetch_models_for_type(api, &type_id).await,
            },
        }
    }
}

/// A finished fetch waiting to be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchCompletion {
    VehicleTypes {
        seq: RequestSeq,
        result: FetchResult<VehicleType>,
    },
    VehicleModels {
        seq: RequestSeq,
        result: FetchResult<VehicleModel>,
    },
}

/// What [`OptionCascade::apply`] did with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The completion was current and now backs its slot.
    Applied { failure: Option<String> },
    /// A newer request for the same slot was issued after this one.
    Discarded,
}

// ---------------------------------------------------------------------------
// Candidate lists
// ---------------------------------------------------------------------------

/// One dependent option list together with the parent value it was
/// requested for and the sequence number of the latest request.
#[derive(Debug, Clone)]
pub struct CandidateList<P, T> {
    parent: Option<P>,
    items: Vec<T>,
    latest: Option<RequestSeq>,
    status: SlotStatus,
}

impl<P: PartialEq, T> CandidateList<P, T> {
    fn new() -> Self {
        Self {
            parent: None,
            items: Vec::new(),
            latest: None,
            status: SlotStatus::Empty,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Parent selection the list was (or is being) loaded for.
    pub fn parent(&self) -> Option<&P> {
        self.parent.as_ref()
    }

    pub fn status(&self) -> SlotStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SlotStatus::Loading
    }

    pub fn latest_seq(&self) -> Option<RequestSeq> {
        self.latest
    }

    /// True when the list is loaded or loading for exactly this parent, so
    /// requesting it again would be redundant. A failed load is not bound,
    /// which lets re-selecting the parent retry.
    pub fn is_bound_to(&self, parent: &P) -> bool {
        self.parent.as_ref() == Some(parent)
            && matches!(self.status, SlotStatus::Loading | SlotStatus::Loaded)
    }

    fn issue(&mut self, parent: P, seq: RequestSeq) {
        self.parent = Some(parent);
        self.items.clear();
        self.latest = Some(seq);
        self.status = SlotStatus::Loading;
    }

    /// Drop the list and supersede any in-flight request for it.
    fn invalidate(&mut self, seq: RequestSeq) {
        self.parent = None;
        self.items.clear();
        self.latest = Some(seq);
        self.status = SlotStatus::Empty;
    }

    fn accept(&mut self, seq: RequestSeq, result: FetchResult<T>) -> ApplyOutcome {
        if self.latest != Some(seq) || self.status != SlotStatus::Loading {
            return ApplyOutcome::Discarded;
        }
        self.items = result.items;
        self.status = if result.failure.is_some() {
            SlotStatus::Failed
        } else {
            SlotStatus::Loaded
        };
        ApplyOutcome::Applied {
            failure: result.failure,
        }
    }
}

// ---------------------------------------------------------------------------
// OptionCascade
// ---------------------------------------------------------------------------

/// Owns both dependent lists and the shared request counter.
#[derive(Debug, Clone)]
pub struct OptionCascade {
    last_seq: u64,
    types: CandidateList<WheelCount, VehicleType>,
    models: CandidateList<EntityId, VehicleModel>,
}

impl Default for OptionCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionCascade {
    pub fn new() -> Self {
        Self {
            last_seq: 0,
            types: CandidateList::new(),
            models: CandidateList::new(),
        }
    }

    pub fn vehicle_types(&self) -> &CandidateList<WheelCount, VehicleType> {
        &self.types
    }

    pub fn vehicle_models(&self) -> &CandidateList<EntityId, VehicleModel> {
        &self.models
    }

    /// Whether `id` is one of the currently offered vehicle types.
    pub fn offers_type(&self, id: &EntityId) -> bool {
        self.types.items().iter().any(|t| &t.id == id)
    }

    /// Whether `id` is one of the currently offered models.
    pub fn offers_model(&self, id: &EntityId) -> bool {
        self.models.items().iter().any(|m| &m.id == id)
    }

    /// Start loading the types for `wheels`. The model list depends on the
    /// chosen type, so it is invalidated as well.
    pub fn request_types(&mut self, wheels: WheelCount) -> PendingFetch {
        let seq = self.next_seq();
        self.types.issue(wheels, seq);
        self.invalidate(CascadeSlot::VehicleModels);
        tracing::debug!(seq = seq.get(), wheels = %wheels, "Requesting vehicle types");
        PendingFetch::VehicleTypes { seq, wheels }
    }

    /// Start loading the models for `type_id`.
    pub fn request_models(&mut self, type_id: EntityId) -> PendingFetch {
        let seq = self.next_seq();
        self.models.issue(type_id.clone(), seq);
        tracing::debug!(seq = seq.get(), type_id = %type_id, "Requesting vehicle models");
        PendingFetch::VehicleModels { seq, type_id }
    }

    /// Clear a slot (and, for vehicle types, the dependent model slot).
    /// In-flight responses for cleared slots will be discarded.
    pub fn invalidate(&mut self, slot: CascadeSlot) {
        let seq = self.next_seq();
        match slot {
            CascadeSlot::VehicleTypes => {
                self.types.invalidate(seq);
                self.invalidate(CascadeSlot::VehicleModels);
            }
            CascadeSlot::VehicleModels => self.models.invalidate(seq),
        }
    }

    /// Apply a completed fetch if it is still the latest for its slot.
    pub fn apply(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let (slot, seq, outcome) = match completion {
            FetchCompletion::VehicleTypes { seq, result } => {
                (CascadeSlot::VehicleTypes, seq, self.types.accept(seq, result))
            }
            FetchCompletion::VehicleModels { seq, result } => {
                (CascadeSlot::VehicleModels, seq, self.models.accept(seq, result))
            }
        };
        if outcome == ApplyOutcome::Discarded {
            tracing::debug!(?slot, seq = seq.get(), "Discarding stale option list response");
        }
        outcome
    }

    fn next_seq(&mut self) -> RequestSeq {
        self.last_seq += 1;
        RequestSeq(self.last_seq)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
