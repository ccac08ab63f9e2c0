mod overlaps;
mod ref_iter;

pub(crate) use overlaps::*;
pub(crate) use ref_iter::*;
