/// Catalog outline to convert, relative to the repository root
pub const SOURCE_PATH: &str = "funkcje";

/// Destination consumed by the frontend data layer
pub const OUTPUT_PATH: &str = "frontend/src/data/generated/taskBudget.json";

/// Segment count of a leaf task code (codes like `1.1.1.1`)
pub const LEAF_LEVEL: usize = 4;
