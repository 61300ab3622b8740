pub mod controls;
pub mod pointer;
pub mod scroll;

pub use controls::{wire_minimal_fx_toggle, wire_teardown, wire_variant_toggle};
pub use pointer::wire_pointermove;
pub use scroll::{wire_scroll_handlers, ScrollWiring};
