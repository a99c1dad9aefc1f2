multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_COORDINATES, ERR_MAP_OVERLAPPED, ERR_TERRAIN_NOT_IN_MAP, ERR_TERRAIN_SIZE, ERR_TERRAIN_SOLD};
use crate::geometry::TERRAIN_SIZE;
use crate::types::{Parcel, Terrain};

/// Map bound and the list of sold parcels, shared by both
/// proposal lifecycles.
#[multiversx_sc::module]
pub trait TerritoryModule {
    fn require_well_formed(&self, terrain: &Terrain) {
        require!(terrain.is_well_formed(), ERR_INVALID_COORDINATES);
    }

    /// Full buy-side geometry check: inside the current map, exactly one
    /// allotment in size, clear of every sold parcel.
    fn require_terrain_buyable(&self, terrain: &Terrain) {
        require!(terrain.is_within(&self.map_bound().get()), ERR_TERRAIN_NOT_IN_MAP);
        require!(terrain.is_allotted_size(TERRAIN_SIZE), ERR_TERRAIN_SIZE);
        require!(!self.is_terrain_sold(terrain), ERR_TERRAIN_SOLD);
    }

    fn require_outside_map(&self, terrain: &Terrain) {
        require!(!terrain.overlaps(&self.map_bound().get()), ERR_MAP_OVERLAPPED);
    }

    fn is_terrain_sold(&self, terrain: &Terrain) -> bool {
        self.parcels()
            .iter()
            .any(|parcel| parcel.sold && parcel.terrain.overlaps(terrain))
    }

    fn record_parcel(&self, terrain: &Terrain, owner: &ManagedAddress) {
        let parcel = Parcel {
            terrain: *terrain,
            owner: owner.clone(),
            sold: true,
        };
        self.parcels().push(&parcel);
    }

    /// The new bound replaces the old one outright.
    fn replace_map(&self, terrain: &Terrain) {
        self.map_bound().set(terrain);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getMap)]
    fn get_map(&self) -> Terrain {
        self.map_bound().get()
    }

    #[view(getTerrainSize)]
    fn get_terrain_size(&self) -> u64 {
        TERRAIN_SIZE
    }

    #[view(getParcelCount)]
    fn get_parcel_count(&self) -> u64 {
        self.parcels().len() as u64
    }

    /// Sold parcels in sale order. `from` is 0-based.
    #[view(getParcels)]
    fn get_parcels(&self, from: u64, count: u64) -> MultiValueEncoded<Parcel<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.parcels().len();
        let start = from as usize;
        let end = core::cmp::min(start.saturating_add(count as usize), total);

        for idx in start..end {
            // VecMapper is 1-indexed
            result.push(self.parcels().get(idx + 1));
        }
        result
    }

    /// Whether a buy proposal for this rectangle would pass the
    /// geometric checks right now.
    #[view(isTerrainAvailable)]
    fn is_terrain_available(&self, x1: u64, x2: u64, y1: u64, y2: u64) -> bool {
        let terrain = Terrain::new(x1, x2, y1, y2);
        terrain.is_well_formed()
            && terrain.is_within(&self.map_bound().get())
            && terrain.is_allotted_size(TERRAIN_SIZE)
            && !self.is_terrain_sold(&terrain)
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("mapBound")]
    fn map_bound(&self) -> SingleValueMapper<Terrain>;

    #[storage_mapper("parcels")]
    fn parcels(&self) -> VecMapper<Parcel<Self::Api>>;
}
