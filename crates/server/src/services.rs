pub mod crawl;
pub mod notifier;

pub use crawl::{CrawlError, CrawlService};
pub use notifier::{create_notifier, NotifierHandle};
