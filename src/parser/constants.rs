// Constants for the msdscript parser

/// Default bound on expression nesting
/// Every operator's right operand and every `( )`, `_let` or `_if` sub-expression
/// is one level deeper than its parent
pub const DEFAULT_MAX_DEPTH: usize = 256;
