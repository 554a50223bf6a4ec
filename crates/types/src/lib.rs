pub mod ids;
pub mod node;
pub mod path;
pub mod region;
pub mod width;

pub use ids::{IdAllocator, Level, NodeId};
pub use node::{AttrMap, Node, NodeKind};
pub use path::{
    PathInfo, PathKind, PathMap, SectionMeta, SectionMetaMap, column_path, module_path,
    normalize_slug, parse_path, section_path,
};
pub use region::Region;
pub use width::{ColumnWidth, GRID_UNITS, layout_string, parse_layout};
