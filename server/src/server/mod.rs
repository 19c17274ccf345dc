mod ghost_fixer;
pub use ghost_fixer::GhostFixer;
