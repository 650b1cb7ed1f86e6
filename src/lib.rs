pub mod cli;
pub mod input;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod scale;

pub mod prelude {
    pub use crate::input::loader::read_dataset;
    pub use crate::model::dataset::{ColumnRole, Dataset};
    pub use crate::scale::ScalingStats;
    pub use crate::scale::matrix::{MatrixScaling, normalize_matrix};
    pub use crate::scale::vector::{VectorScaling, normalize_vector};
}
