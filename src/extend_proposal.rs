multiversx_sc::imports!();

use crate::errors::{ERR_ALREADY_VOTED, ERR_CREATOR_VOTE, ERR_NAME_USED, ERR_PROPOSAL_NOT_FOUND};
use crate::owners;
use crate::territory;
use crate::types::{ExtendProposal, ProposalStatus, Terrain};

/// Extend proposals: a caller offers a rectangle outside the current
/// map. The first vote from an elector other than the creator makes
/// it the new map bound. Names live apart from buy proposal names.
#[multiversx_sc::module]
pub trait ExtendProposalModule: owners::OwnersModule + territory::TerritoryModule {
    // ========================================================
    // ENDPOINT: makeExtendProposal
    // ========================================================

    #[endpoint(makeExtendProposal)]
    fn make_extend_proposal(&self, name: ManagedBuffer, x1: u64, x2: u64, y1: u64, y2: u64) {
        let caller = self.blockchain().get_caller();
        require!(self.extend_proposals(&name).is_empty(), ERR_NAME_USED);

        let terrain = Terrain::new(x1, x2, y1, y2);
        self.require_well_formed(&terrain);
        self.require_outside_map(&terrain);

        let proposal = ExtendProposal {
            name: name.clone(),
            creator: caller.clone(),
            terrain,
            vote_count: 0,
            status: ProposalStatus::Created,
            created_at: self.blockchain().get_block_timestamp(),
        };

        self.extend_proposals(&name).set(&proposal);
        self.pending_extend_proposals().insert(name.clone());

        self.extend_proposal_created_event(&name, &caller, &terrain);
    }

    // ========================================================
    // ENDPOINT: voteMapProposal
    // ========================================================

    #[endpoint(voteMapProposal)]
    fn vote_map_proposal(&self, name: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let proposal_mapper = self.extend_proposals(&name);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        self.require_owner(&caller);

        let mut proposal = proposal_mapper.get();
        require!(proposal.creator != caller, ERR_CREATOR_VOTE);
        require!(!proposal.is_resolved(), ERR_ALREADY_VOTED);

        // The map may have been replaced since the proposal was made.
        self.require_outside_map(&proposal.terrain);

        proposal.vote_count += 1;
        proposal.status = ProposalStatus::Resolved;
        proposal_mapper.set(&proposal);
        self.map_voters(&name).insert(caller.clone());
        self.pending_extend_proposals().remove(&name);

        self.replace_map(&proposal.terrain);

        self.map_proposal_voted_event(&name, &caller);
        self.map_extended_event(&name, &proposal.terrain);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getExtendProposal)]
    fn get_extend_proposal(&self, name: ManagedBuffer) -> ExtendProposal<Self::Api> {
        let proposal_mapper = self.extend_proposals(&name);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        proposal_mapper.get()
    }

    #[view(getExtendProposalStatus)]
    fn get_extend_proposal_status(&self, address: ManagedAddress, name: ManagedBuffer) -> bool {
        let proposal_mapper = self.extend_proposals(&name);
        !proposal_mapper.is_empty() && proposal_mapper.get().creator == address
    }

    #[view(getMapVoterStatus)]
    fn get_map_voter_status(&self, address: ManagedAddress, name: ManagedBuffer) -> bool {
        self.map_voters(&name).contains(&address)
    }

    #[view(getPendingExtendProposals)]
    fn get_pending_extend_proposals(&self) -> MultiValueEncoded<ExtendProposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for name in self.pending_extend_proposals().iter() {
            result.push(self.extend_proposals(&name).get());
        }
        result
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("extendProposalCreated")]
    fn extend_proposal_created_event(
        &self,
        #[indexed] name: &ManagedBuffer,
        #[indexed] creator: &ManagedAddress,
        terrain: &Terrain,
    );

    #[event("mapProposalVoted")]
    fn map_proposal_voted_event(&self, #[indexed] name: &ManagedBuffer, #[indexed] voter: &ManagedAddress);

    #[event("mapExtended")]
    fn map_extended_event(&self, #[indexed] name: &ManagedBuffer, terrain: &Terrain);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("extendProposals")]
    fn extend_proposals(&self, name: &ManagedBuffer) -> SingleValueMapper<ExtendProposal<Self::Api>>;

    #[storage_mapper("mapVoters")]
    fn map_voters(&self, name: &ManagedBuffer) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("pendingExtendProposals")]
    fn pending_extend_proposals(&self) -> SetMapper<ManagedBuffer>;
}
