multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Terrain — axis-aligned rectangle (x1,y1)-(x2,y2)
// ============================================================

/// Used for the map bound, for a parcel's extent and for a
/// proposed map extension. Well formed when `x1 < x2` and `y1 < y2`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Terrain {
    pub x1: u64,
    pub x2: u64,
    pub y1: u64,
    pub y2: u64,
}

impl Terrain {
    pub const fn new(x1: u64, x2: u64, y1: u64, y2: u64) -> Self {
        Terrain { x1, x2, y1, y2 }
    }
}

// ============================================================
// Parcel — a sold, owned terrain
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Parcel<M: ManagedTypeApi> {
    pub terrain: Terrain,
    pub owner: ManagedAddress<M>,
    pub sold: bool,
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProposalStatus {
    /// Waiting for its single approving vote.
    Created,
    /// Approved by an elector. Terminal state.
    Resolved,
}

// ============================================================
// Proposals
// ============================================================

/// Request to buy one allotment-sized parcel inside the map.
/// Voters live in their own storage set, keyed by name.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct BuyProposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub terrain: Terrain,
    pub vote_count: u64,
    pub status: ProposalStatus,
    /// Block timestamp at creation
    pub created_at: u64,
}

/// Request to replace the map bound with a new rectangle.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ExtendProposal<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub creator: ManagedAddress<M>,
    pub terrain: Terrain,
    pub vote_count: u64,
    pub status: ProposalStatus,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> BuyProposal<M> {
    pub fn is_resolved(&self) -> bool {
        self.status == ProposalStatus::Resolved
    }
}

impl<M: ManagedTypeApi> ExtendProposal<M> {
    pub fn is_resolved(&self) -> bool {
        self.status == ProposalStatus::Resolved
    }
}
