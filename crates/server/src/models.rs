pub mod actor;
pub mod crawl;
pub mod metadata;
pub mod response;

pub use actor::PersistedActor;
pub use crawl::{CrawlAccepted, CrawlRequest, CrawlResultEvent};
pub use metadata::{Metadata, NewMetadata};
pub use response::{ActorResponse, MetadataResponse};
