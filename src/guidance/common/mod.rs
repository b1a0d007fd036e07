pub(crate) mod matrix;
pub(crate) mod mrp;
pub(crate) mod state_vector;
