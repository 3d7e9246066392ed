use crate::parser::Curve;
use polyflat::flatten::FlattenOptions;
use std::io;

pub struct FlattenCmd {
    pub curves: Vec<Curve>,
    pub output: Box<dyn io::Write>,
    pub options: FlattenOptions,
    /// Round the input to integer coordinates and flatten in the integer space.
    pub integer: bool,
    pub count: bool,
}
