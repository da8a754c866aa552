pub mod render;
pub mod tournament;

pub use render::OutputFormat;
pub use tournament::{ResetScope, TournamentService};
