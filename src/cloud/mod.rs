//! Word cloud core: geometry, layout, colouring, gestures and the store
//! contract. Nothing in here touches the DOM.

pub mod error;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod model;
pub mod settings;
pub mod spiral;
pub mod store;
pub mod style;

pub use error::{CloudError, SettingsError, StoreError, StoreResult};
pub use geometry::{BoxMetrics, Point, Rect, Size};
pub use interaction::{InteractionController, WordEvent};
pub use layout::{LayoutMode, LayoutOptions, Placement, PlacementList, Rotation, WordId, layout};
pub use model::{CloudId, NewWordCloud, WordCloud};
pub use settings::Settings;
pub use spiral::SpiralShape;
pub use store::{CloudStore, MemoryStore, apply_event};
pub use style::{ColorScheme, color_for, color_for_tag};
