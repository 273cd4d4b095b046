//! Set and map operations
//!
//! Every operation borrows its inputs and returns a new container. Variadic
//! operations take a slice of references and require at least two inputs.

pub mod maps;
pub mod sets;

pub use maps::{group_by, map_filter, map_invert, map_merge, map_values};
pub use sets::{
    is_disjoint, is_subset, is_superset, set_difference, set_intersection,
    set_symmetric_difference, set_union,
};
