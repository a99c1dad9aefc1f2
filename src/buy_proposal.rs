multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_CREATOR_VOTE, ERR_NAME_USED, ERR_PROPOSAL_NOT_FOUND};
use crate::owners;
use crate::territory;
use crate::types::{BuyProposal, ProposalStatus, Terrain};

/// Buy proposals: a caller asks for one unsold, allotment-sized
/// terrain inside the map. The first vote from an elector other than
/// the creator sells the terrain and enrolls the creator as an owner.
#[multiversx_sc::module]
pub trait BuyProposalModule: owners::OwnersModule + territory::TerritoryModule {
    // ========================================================
    // ENDPOINT: makeBuyProposal
    // ========================================================

    #[endpoint(makeBuyProposal)]
    fn make_buy_proposal(&self, name: ManagedBuffer, x1: u64, x2: u64, y1: u64, y2: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.buy_proposals(&name).is_empty(), ERR_NAME_USED);

        let terrain = Terrain::new(x1, x2, y1, y2);
        self.require_well_formed(&terrain);
        self.require_terrain_buyable(&terrain);

        let proposal = BuyProposal {
            name: name.clone(),
            creator: caller.clone(),
            terrain,
            vote_count: 0,
            status: ProposalStatus::Created,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.buy_proposals(&name).set(&proposal);
        self.pending_buy_proposals().insert(name.clone());

        self.buy_proposal_created_event(&name, &caller, &terrain);
    }

    // ========================================================
    // ENDPOINT: voteTerrainProposal
    // A single approving vote resolves the proposal.
    // ========================================================

    #[endpoint(voteTerrainProposal)]
    fn vote_terrain_proposal(&self, name: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let proposal_mapper = self.buy_proposals(&name);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.require_owner(&caller);

        let mut proposal = proposal_mapper.get();
        require!(proposal.creator != caller, ERR_CREATOR_VOTE);
        require!(!proposal.is_resolved(), ERR_ALREADY_VOTED);

        // A competing proposal or a map extension may have landed since
        // this one was made.
        self.require_terrain_buyable(&proposal.terrain);

        proposal.vote_count += 1;
        proposal.status = ProposalStatus::Resolved;
        proposal_mapper.set(&proposal);
        self.terrain_voters(&name).insert(caller.clone());
        self.pending_buy_proposals().remove(&name);

        self.record_parcel(&proposal.terrain, &proposal.creator);
        self.enroll_owner(&proposal.creator);

        self.terrain_proposal_voted_event(&name, &caller);
        self.terrain_sold_event(&name, &proposal.creator, &proposal.terrain);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getBuyProposal)]
    fn get_buy_proposal(&self, name: ManagedBuffer) -> BuyProposal<Self::Api> {
        let proposal_mapper = self.buy_proposals(&name);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal_mapper.get()
    }

    /// True if `address` created the buy proposal called `name`.
    #[view(getBuyProposalStatus)]
    fn get_buy_proposal_status(&self, address: ManagedAddress, name: ManagedBuffer) -> bool {
        let proposal_mapper = self.buy_proposals(&name);
        !proposal_mapper.is_empty() && proposal_mapper.get().creator == address
    }

    #[view(getTerrainVoterStatus)]
    fn get_terrain_voter_status(&self, address: ManagedAddress, name: ManagedBuffer) -> bool {
        self.terrain_voters(&name).contains(&address)
    }

    #[view(getPendingBuyProposals)]
    fn get_pending_buy_proposals(&self) -> MultiValueEncoded<BuyProposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for name in self.pending_buy_proposals().iter() {
            result.push(self.buy_proposals(&name).get());
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("buyProposalCreated")]
    fn buy_proposal_created_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] creator: &ManagedAddress,
        terrain: &Terrain,
    );

    #[event("terrainProposalVoted")]
    fn terrain_proposal_voted_event(&self, #[indexed] name: &ManagedBuffer, #[indexed] voter: &ManagedAddress);

    #[event("terrainSold")]
    fn terrain_sold_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] owner: &ManagedAddress,
        terrain: &Terrain,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("buyProposals")]
    fn buy_proposals(&self, name: &ManagedBuffer) -> SingleValueMapper<BuyProposal<Self::Api>>;

    #[storage_mapper("terrainVoters")]
    fn terrain_voters(&self, name: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;

    /// Unresolved buy proposal names, in creation order.
    #[storage_mapper("pendingBuyProposals")]
    fn pending_buy_proposals(&self) -> SetMapper<ManagedBuffer>;
}
