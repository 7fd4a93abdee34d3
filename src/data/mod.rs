/// Data layer: core types and file loading.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Table    │  headers + row-major cells
///   └──────────┘
///        │
///        ▼
///   numeric_column("…")  →  Vec<f64> for the analysis pipeline
/// ```

pub mod loader;
pub mod model;
