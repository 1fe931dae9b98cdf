//! Hand-written serde impls for types whose serialized form is not their field layout.

mod notation;
mod numeric;
mod version;
