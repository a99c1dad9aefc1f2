multiversx_sc::imports!();

use crate::errors::ERR_NOT_OWNER;

/// The electorate: every address that holds a parcel, plus the
/// genesis owner enrolled at deploy. Membership only ever grows.
#[multiversx_sc::module]
pub trait OwnersModule {
    /// Enrolls `address` as an elector. Re-enrolling an existing
    /// owner is a no-op and does not touch the count.
    fn enroll_owner(&self, address: &ManagedAddress) {
        if self.owners().insert(address.clone()) {
            let total = self.total_owner_count();
            self.owner_enrolled_event(address, total);
        }
    }

    fn require_owner(&self, address: &ManagedAddress) {
        require!(self.owners().contains(address), ERR_NOT_OWNER);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isOwner)]
    fn is_owner(&self, address: &ManagedAddress) -> bool {
        self.owners().contains(address)
    }

    #[view(totalOwnerCount)]
    fn total_owner_count(&self) -> u64 {
        self.owners().len() as u64
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("ownerEnrolled")]
    fn owner_enrolled_event(&self, #[indexed] owner: &ManagedAddress, total_owner_count: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;
}
