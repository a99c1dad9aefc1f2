pub const ERR_TERRAIN_NOT_IN_MAP: &str = "Terrain is not in map";
pub const ERR_TERRAIN_SIZE: &str = "Out of terrain size";
pub const ERR_NAME_USED: &str = "Proposal name was already used";
pub const ERR_TERRAIN_SOLD: &str = "Terrain was already sold";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal was not made with this name";
pub const ERR_NOT_OWNER: &str = "Not owner";
pub const ERR_CREATOR_VOTE: &str = "Proposal can't be voted by proposal creator";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_MAP_OVERLAPPED: &str = "Map is overlapped with existing maps";
pub const ERR_INVALID_COORDINATES: &str = "Invalid terrain coordinates";
