pub use folio_types::prelude::*;

// vim: ts=4
