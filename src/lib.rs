//! Dec Num \
//! This crate provides:
//! - [`DecInt`]: Immutable arbitrary-precision signed decimal integers, stored one
//!   decimal digit per element with the least significant digit first.
//! - [`ParseDecIntError`]: the error returned when decimal text is not a
//!   well-formed signed integer.

mod dec_int;
mod dec_num_cache;
mod dec_num_constants;

pub use dec_int::{DecInt, ParseDecIntError};

#[cfg(test)]
mod tests {
    use crate::DecInt;

    #[test]
    fn it_works() {
        let a: DecInt = "10000000000000".parse().unwrap();
        let b: DecInt = "-900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a - b = {}", &a - &b);
        println!("a * b = {}", &a * &b);
        assert_eq!((&a + &b).to_string(), "9100000000000");
        assert_eq!((&a - &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "-9000000000000000000000000");
    }
}
