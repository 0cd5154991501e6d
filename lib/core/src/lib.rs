pub mod builder;
pub mod circuit;
pub mod cnf;
pub mod factoring;
pub mod gate;
pub mod karatsuba;
pub mod lit;
pub mod nbit;
pub mod symbol;
pub mod tseitin;
pub mod wallace;
