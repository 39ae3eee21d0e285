//! Storage collaborators: Postgres-backed stores and the picture asset.

pub mod database;
pub mod dog_store;
pub mod pictures;
pub mod walk_store;

pub use database::Database;
pub use dog_store::DogStore;
pub use pictures::PictureStore;
pub use walk_store::WalkStore;
