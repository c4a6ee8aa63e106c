mod auth;
mod collection;
mod enrichment;
mod search;

pub use auth::TokenContext;
pub use collection::{CollectionStore, StoreError};
pub use enrichment::{AddOutcome, Enrichment, add_album};
pub use search::search_albums;
