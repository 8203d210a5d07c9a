pub mod fixtures;
pub mod cart {
    pub mod repository;
}
pub mod delivery_slot {
    pub mod entity;
    pub mod repository;
}
pub mod order {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
