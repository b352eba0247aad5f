pub mod assertions;
pub mod grammars;
