pub mod declarator;
pub mod enumerator;
pub mod unary;
