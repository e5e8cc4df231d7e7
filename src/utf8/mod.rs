pub mod any_of;
pub mod char;
pub mod digit;
pub mod letter;
pub mod satisfies;
pub mod string;
pub mod whitespace;

pub use any_of::any_of;
pub use char::{any_char, is_char};
pub use digit::digit;
pub use letter::letter;
pub use satisfies::satisfies;
pub use string::literal;
pub use whitespace::{whitespace, whitespace_char};
