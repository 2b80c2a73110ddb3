//! OData surface: `$filter` grammar, entity keys, context URLs, envelopes, `$metadata`.

pub mod context;
pub mod filter;
pub mod key;
pub mod metadata;
pub mod response;

pub use context::ServiceRoot;
pub use filter::{ComparisonOperator, FilterError, FilterField, FilterPredicate};
pub use key::MenuItemKey;
pub use metadata::{MetadataError, MetadataProvider};
pub use response::{EntityResponse, ValueResponse};

/// Entity set exposed under `/odata/`.
pub const MENU_ITEMS: &str = "MenuItems";
