pub mod bits;
pub mod format;
pub mod render;
pub mod row;

pub use bits::{join_bits, BitAccumulator};
pub use format::{guess_format, FieldTally, InsnFormat};
pub use render::to_c_initializer;
pub use row::{parse_row, Matcher, RowError};
