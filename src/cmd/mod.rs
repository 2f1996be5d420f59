/// Plug path inspection command.
pub mod plug;
/// Time range parsing command.
pub mod range;
/// Remap policy command.
pub mod remap;
/// Search/replace command.
pub mod subst;
mod util;
