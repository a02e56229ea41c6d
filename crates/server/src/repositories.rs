pub mod actor;
pub mod metadata;

pub use actor::ActorRepository;
pub use metadata::{ActorLink, MetadataRepository};
