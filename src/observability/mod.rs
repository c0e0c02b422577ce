//! Observability: tracing setup, crash reports and context tracking.
//!
//! Install both at startup:
//!
//! ```ignore
//! use medcost::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{get_current_context, set_data_file, set_page, set_phase, AppContext, Phase};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, is_tui_active, set_tui_active};
