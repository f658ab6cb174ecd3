//! Office locations, search and the map adapter.

/// Search over location records
mod filter;
/// Location finder: list, selection and map synchronization
mod finder;
/// Map capability consumed by the finder
pub mod map;
/// Office records
mod record;
/// In-process map provider and script loader
pub mod recording;

pub use filter::filter_locations;
pub use finder::{
    FinderOptions,
    ListEntry,
    LocationFinder,
    MapStatus,
};
pub use map::{
    InfoWindowHandle,
    MapError,
    MapHandle,
    MapOptions,
    MapProvider,
    MarkerHandle,
    MarkerOptions,
    ScriptLoader,
    script_url,
};
pub use record::{
    Coordinates,
    Location,
    sample_locations,
};
pub use recording::{
    MapCommand,
    OfflineScriptLoader,
    RecordingMap,
};
