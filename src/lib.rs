#![no_std]

multiversx_sc::imports!();

pub mod buy_proposal;
pub mod coordinates_voting_proxy;
pub mod errors;
pub mod extend_proposal;
pub mod geometry;
pub mod owners;
pub mod territory;
pub mod types;

use errors::ERR_INVALID_COORDINATES;
use types::Terrain;

// ============================================================
// Contract
// ============================================================

/// Land allocation governed by existing landholders. Buy proposals
/// claim a parcel inside the map, extend proposals move the map bound.
/// Both are settled by one vote from any owner except the creator,
/// and every approved buyer joins the electorate.
#[multiversx_sc::contract]
pub trait CoordinatesVoting:
    owners::OwnersModule
    + territory::TerritoryModule
    + buy_proposal::BuyProposalModule
    + extend_proposal::ExtendProposalModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Sets the initial map bound; the deployer becomes the genesis owner.
    #[init]
    fn init(&self, x1: u64, x2: u64, y1: u64, y2: u64) {
        let map = Terrain::new(x1, x2, y1, y2);
        require!(map.is_well_formed(), ERR_INVALID_COORDINATES);
        self.map_bound().set(map);

        let caller = self.blockchain().get_caller();
        self.enroll_owner(&caller);
    }

    #[upgrade]
    fn upgrade(&self) {}
}
