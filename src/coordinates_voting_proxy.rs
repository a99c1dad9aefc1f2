use multiversx_sc::proxy_imports::*;

use crate::types::{BuyProposal, ExtendProposal, Parcel, Terrain};

pub struct CoordinatesVotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for CoordinatesVotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = CoordinatesVotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        CoordinatesVotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct CoordinatesVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> CoordinatesVotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>, Arg2: ProxyArg<u64>, Arg3: ProxyArg<u64>>(
        self,
        x1: Arg0,
        x2: Arg1,
        y1: Arg2,
        y2: Arg3,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&x1)
            .argument(&x2)
            .argument(&y1)
            .argument(&y2)
            .original_result()
    }
}

impl<Env, From, To, Gas> CoordinatesVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    // ── Buy proposals ──

    pub fn make_buy_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        name: Arg0,
        x1: Arg1,
        x2: Arg2,
        y1: Arg3,
        y2: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("makeBuyProposal")
            .argument(&name)
            .argument(&x1)
            .argument(&x2)
            .argument(&y1)
            .argument(&y2)
            .original_result()
    }

    pub fn vote_terrain_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteTerrainProposal")
            .argument(&name)
            .original_result()
    }

    pub fn get_buy_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BuyProposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBuyProposal")
            .argument(&name)
            .original_result()
    }

    pub fn get_buy_proposal_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        address: Arg0,
        name: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBuyProposalStatus")
            .argument(&address)
            .argument(&name)
            .original_result()
    }

    pub fn get_terrain_voter_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        address: Arg0,
        name: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTerrainVoterStatus")
            .argument(&address)
            .argument(&name)
            .original_result()
    }

    pub fn get_pending_buy_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, BuyProposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingBuyProposals")
            .original_result()
    }

    // ── Extend proposals ──

    pub fn make_extend_proposal<
        Arg0: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
        Arg4: ProxyArg<u64>,
    >(
        self,
        name: Arg0,
        x1: Arg1,
        x2: Arg2,
        y1: Arg3,
        y2: Arg4,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("makeExtendProposal")
            .argument(&name)
            .argument(&x1)
            .argument(&x2)
            .argument(&y1)
            .argument(&y2)
            .original_result()
    }

    pub fn vote_map_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("voteMapProposal")
            .argument(&name)
            .original_result()
    }

    pub fn get_extend_proposal<Arg0: ProxyArg<ManagedBuffer<Env::Api>>>(
        self,
        name: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ExtendProposal<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getExtendProposal")
            .argument(&name)
            .original_result()
    }

    pub fn get_extend_proposal_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        address: Arg0,
        name: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getExtendProposalStatus")
            .argument(&address)
            .argument(&name)
            .original_result()
    }

    pub fn get_map_voter_status<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        address: Arg0,
        name: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMapVoterStatus")
            .argument(&address)
            .argument(&name)
            .original_result()
    }

    pub fn get_pending_extend_proposals(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, ExtendProposal<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPendingExtendProposals")
            .original_result()
    }

    // ── Territory ──

    pub fn get_map(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, Terrain> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMap")
            .original_result()
    }

    pub fn get_terrain_size(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTerrainSize")
            .original_result()
    }

    pub fn get_parcel_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParcelCount")
            .original_result()
    }

    pub fn get_parcels<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Parcel<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getParcels")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn is_terrain_available<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<u64>,
        Arg3: ProxyArg<u64>,
    >(
        self,
        x1: Arg0,
        x2: Arg1,
        y1: Arg2,
        y2: Arg3,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isTerrainAvailable")
            .argument(&x1)
            .argument(&x2)
            .argument(&y1)
            .argument(&y2)
            .original_result()
    }

    // ── Owners ──

    pub fn is_owner<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        address: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isOwner")
            .argument(&address)
            .original_result()
    }

    pub fn total_owner_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalOwnerCount")
            .original_result()
    }
}
