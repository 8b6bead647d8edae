//! # DecInt
//! Immutable arbitrary-precision signed decimal integers. A DecInt stores one
//! decimal digit per element, least significant digit first, with no leading
//! zeros; the value zero is the empty digit sequence and is never negative.
//! # Example
//! ```
//! use dec_num::DecInt;
//!
//! let a: DecInt = "10000000000000".parse().unwrap();
//! let b: DecInt = "-900000000000".parse().unwrap();
//! println!("a = {}", a);
//! println!("a + b = {}", &a + &b);
//! println!("a - b = {}", &a - &b);
//! println!("a * b = {}", &a * &b);
//! ```
//!

use std::fmt;
use std::fmt::Display;
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Neg,
};
use std::cmp::{Ord, Eq, PartialEq, PartialOrd, Ordering};
use std::str::FromStr;

use crate::dec_num_constants::*;
use crate::dec_num_cache::*;

pub const ZERO: DecInt = DecInt { negative: false, digits: vec![] };

macro_rules! strip_msd_zeros {
    ($vec: expr) => {
        {
            let mut v = $vec;
            while let Some(&0) = v.last() {
                v.pop();
            }
            v
        }
    };
}

#[derive(Debug, Clone)]
pub struct DecInt {
    negative: bool,
    digits: Vec<u8>,
}

// construction
impl DecInt {
    /// The digit sequence must already be canonical: every element in 0..=9
    /// and no trailing (most significant) zero element.
    pub unsafe fn from_raw(digits: Vec<u8>, negative: bool) -> Self {
        DecInt::new(digits, negative)
    }
    fn new(digits: Vec<u8>, negative: bool) -> Self {
        if digits.is_empty() {
            ZERO
        } else {
            DecInt { negative, digits }
        }
    }
}

// accessors
impl DecInt {
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
    pub fn is_negative(&self) -> bool {
        self.negative
    }
    /// Number of stored decimal digits; zero has none.
    pub fn num_digits(&self) -> usize {
        self.digits.len()
    }
    pub fn abs(&self) -> DecInt {
        let mut result = self.clone();
        result.negative = false;
        result
    }
}

// rendering
impl Display for DecInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        let mut s = String::with_capacity(self.digits.len() + 1);
        if self.negative {
            s.push('-');
        }
        for &d in self.digits.iter().rev() {
            s.push(DIGIT_CHARS[d as usize]);
        }
        f.write_str(&s)
    }
}

/// Error produced when a string is not a well-formed signed decimal integer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDecIntError {
    /// The input was empty, or whitespace only.
    Empty,
    /// A sign character with no digits after it.
    MissingDigits,
    /// A character in the digit run that is not an ASCII digit.
    InvalidCharacter(char),
}

impl Display for ParseDecIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseDecIntError::Empty => write!(f, "empty decimal integer string"),
            ParseDecIntError::MissingDigits => write!(f, "sign with no following digits"),
            ParseDecIntError::InvalidCharacter(c) => {
                write!(f, "invalid character {:?} in decimal integer string", c)
            }
        }
    }
}

impl std::error::Error for ParseDecIntError {}

// parsing
impl DecInt {
    /// Parses a signed decimal integer string.
    ///
    /// Whitespace is ignored at the extreme ends of the input only; an
    /// optional single `+` or `-` may precede the digit run. Leading zeros
    /// are consumed but not stored, and an all-zero run yields the canonical
    /// zero even when signed, so `"-0"` and `"+000"` both parse to `0`.
    pub fn parse(text: &str) -> Result<DecInt, ParseDecIntError> {
        let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
        if text.is_empty() {
            return Err(ParseDecIntError::Empty);
        }

        let (negative, run) = match text.as_bytes()[0] {
            b'-' => (true, &text[1..]),
            b'+' => (false, &text[1..]),
            _ => (false, text),
        };

        if run.is_empty() {
            return Err(ParseDecIntError::MissingDigits);
        }
        for c in run.chars() {
            if !c.is_ascii_digit() {
                return Err(ParseDecIntError::InvalidCharacter(c));
            }
        }

        // skip leading zero
        let run = run.as_bytes();
        match run.iter().position(|&b| b != b'0') {
            None => Ok(ZERO),
            Some(first) => {
                let digits = run[first..].iter().rev().map(|&b| b - b'0').collect();
                Ok(DecInt { negative, digits })
            }
        }
    }
}

impl FromStr for DecInt {
    type Err = ParseDecIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecInt::parse(s)
    }
}

macro_rules! impl_unsigned_to_dec_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for DecInt {
        fn from(val: $u) -> Self {
            DecInt::value_of(val as u64, false)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_dec_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for DecInt {
        fn from(val: $i) -> Self {
            if val < 0 {
                DecInt::value_of(val.unsigned_abs() as u64, true)
            } else {
                DecInt::value_of(val as u64, false)
            }
        }
    }
    )*
    };
}
impl_unsigned_to_dec_int!(u8, u16, u32, usize, u64);
impl_signed_to_dec_int!(i8, i16, i32, isize, i64);

impl DecInt {
    fn value_of(val: u64, negative: bool) -> DecInt {
        if val == 0 {
            return ZERO;
        }
        if val <= MAX_CONSTANT as u64 {
            if negative {
                return NEG_CACHE[val as usize].clone();
            } else {
                return POS_CACHE[val as usize].clone();
            }
        }
        let mut digits = Vec::new();
        let mut v = val;
        while v != 0 {
            digits.push((v % RADIX as u64) as u8);
            v /= RADIX as u64;
        }
        DecInt { negative, digits }
    }
}

// magnitude comparison
impl DecInt {
    /// Compares absolute values, ignoring sign.
    ///
    /// No leading zeros are ever stored, so a longer digit sequence is always
    /// the greater magnitude; equal lengths are scanned from the most
    /// significant digit down and the first differing position decides.
    pub fn cmp_magnitude(&self, other: &DecInt) -> Ordering {
        let self_len = self.digits.len();
        let other_len = other.digits.len();
        if self_len != other_len {
            return self_len.cmp(&other_len);
        }
        for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }
}

impl PartialEq for DecInt {
    fn eq(&self, other: &Self) -> bool {
        self.negative == other.negative && self.cmp_magnitude(other).is_eq()
    }
}
impl Eq for DecInt {}

impl PartialOrd for DecInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => self.cmp_magnitude(other).reverse(),
        }
    }
}

// negation
impl Neg for DecInt {
    type Output = DecInt;

    fn neg(self) -> Self::Output {
        if self.digits.is_empty() {
            return self;
        }
        let DecInt { negative, digits } = self;
        DecInt { negative: !negative, digits }
    }
}

impl Neg for &DecInt {
    type Output = DecInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

// addition
impl Add for DecInt {
    type Output = DecInt;

    fn add(self, val: Self) -> Self::Output {
        if val.is_zero() {
            return self;
        }

        if self.is_zero() {
            return val;
        }

        if val.negative == self.negative {
            let negative = self.negative;
            return DecInt::new(DecInt::mag_add(&self.digits, &val.digits), negative);
        }

        match self.cmp_magnitude(&val) {
            Ordering::Less => {
                let negative = val.negative;
                let digits = strip_msd_zeros!(DecInt::mag_sub(&val.digits, &self.digits));
                DecInt::new(digits, negative)
            },
            Ordering::Equal => ZERO,
            Ordering::Greater => {
                let negative = self.negative;
                let digits = strip_msd_zeros!(DecInt::mag_sub(&self.digits, &val.digits));
                DecInt::new(digits, negative)
            },
        }
    }
}

impl DecInt {
    fn mag_add(x: &[u8], y: &[u8]) -> Vec<u8> {
        let len = x.len().max(y.len());
        let mut result = Vec::with_capacity(len + 1);
        let mut carry = 0;

        for i in 0..len {
            let a = x.get(i).copied().unwrap_or(0);
            let b = y.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;
            result.push(sum % RADIX);
            carry = sum / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }

    // big must have magnitude >= little; the difference may carry trailing
    // zeros, which the caller strips.
    fn mag_sub(big: &[u8], little: &[u8]) -> Vec<u8> {
        let mut result = Vec::with_capacity(big.len());
        let mut borrow = 0;

        for i in 0..big.len() {
            let bottom = little.get(i).copied().unwrap_or(0);
            let mut diff = big[i] as i8 - bottom as i8 - borrow;
            if diff < 0 {
                diff += RADIX as i8;
                borrow = 1;
            } else {
                borrow = 0;
            }
            result.push(diff as u8);
        }

        result
    }
}

impl AddAssign for DecInt {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.clone() + rhs;
    }
}

impl Add for &DecInt {
    type Output = DecInt;

    fn add(self, rhs: Self) -> Self::Output {
        self.clone() + rhs.clone()
    }
}

impl AddAssign<&DecInt> for DecInt {
    fn add_assign(&mut self, rhs: &DecInt) {
        *self = self.clone() + rhs.clone();
    }
}

// subtraction
impl Sub for DecInt {
    type Output = DecInt;

    fn sub(self, val: Self) -> Self::Output {
        self + (-val)
    }
}

impl SubAssign for DecInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.clone() - rhs;
    }
}

impl Sub for &DecInt {
    type Output = DecInt;

    fn sub(self, rhs: Self) -> Self::Output {
        self.clone() - rhs.clone()
    }
}

impl SubAssign<&DecInt> for DecInt {
    fn sub_assign(&mut self, rhs: &DecInt) {
        *self = self.clone() - rhs.clone();
    }
}

// multiplication
impl Mul for DecInt {
    type Output = DecInt;

    fn mul(self, val: Self) -> Self::Output {
        if self.is_zero() || val.is_zero() {
            return ZERO;
        }

        let negative = self.negative != val.negative;

        // Grade-school long multiplication: one partial product per digit of
        // the right operand, shifted by its position and accumulated through
        // the magnitude addition used by Add.
        let mut acc: Vec<u8> = Vec::new();
        for (i, &d) in val.digits.iter().enumerate() {
            if d == 0 {
                continue;
            }
            let mut partial = Vec::with_capacity(i + self.digits.len() + 1);
            partial.resize(i, 0);
            partial.extend(DecInt::mul_by_digit(&self.digits, d));
            acc = DecInt::mag_add(&acc, &partial);
        }

        DecInt::new(strip_msd_zeros!(acc), negative)
    }
}

impl DecInt {
    fn mul_by_digit(x: &[u8], d: u8) -> Vec<u8> {
        let mut result = Vec::with_capacity(x.len() + 1);
        let mut carry = 0;

        for &a in x {
            let product = a * d + carry;
            result.push(product % RADIX);
            carry = product / RADIX;
        }

        if carry != 0 {
            result.push(carry);
        }

        result
    }
}

impl MulAssign for DecInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.clone() * rhs;
    }
}

impl Mul<&DecInt> for &DecInt {
    type Output = DecInt;

    fn mul(self, rhs: &DecInt) -> Self::Output {
        self.clone() * rhs.clone()
    }
}

impl MulAssign<&DecInt> for DecInt {
    fn mul_assign(&mut self, rhs: &DecInt) {
        *self = self.clone() * rhs.clone()
    }
}

#[cfg(test)]
fn dec(s: &str) -> DecInt {
    s.parse().expect("valid decimal literal")
}

#[test]
fn test_parse_canonical() {
    assert_eq!(dec("1023").to_string(), "1023");
    assert_eq!(dec("0012").to_string(), "12");
    assert_eq!(dec("+123").to_string(), "123");
    assert_eq!(dec("-001").to_string(), "-1");
    assert_eq!(dec("0").to_string(), "0");
    assert_eq!(dec("+000").to_string(), "0");
    assert_eq!(dec("-0").to_string(), "0");
    assert_eq!(dec("  +123  ").to_string(), "123");
    assert_eq!(dec("\t-42\n").to_string(), "-42");

    // padding never changes the parsed value
    assert_eq!(dec("007"), dec("7"));
    assert_eq!(dec(" -00123 "), dec("-123"));
    assert!(!dec("-0").is_negative());
}

#[test]
fn test_parse_errors() {
    assert_eq!(DecInt::parse(""), Err(ParseDecIntError::Empty));
    assert_eq!(DecInt::parse("   "), Err(ParseDecIntError::Empty));
    assert_eq!(DecInt::parse("+"), Err(ParseDecIntError::MissingDigits));
    assert_eq!(DecInt::parse("-"), Err(ParseDecIntError::MissingDigits));
    assert_eq!(DecInt::parse("12 345"), Err(ParseDecIntError::InvalidCharacter(' ')));
    assert_eq!(DecInt::parse("- 1"), Err(ParseDecIntError::InvalidCharacter(' ')));
    assert_eq!(DecInt::parse("12a45"), Err(ParseDecIntError::InvalidCharacter('a')));
    assert_eq!(DecInt::parse("++1"), Err(ParseDecIntError::InvalidCharacter('+')));
    assert_eq!(DecInt::parse("1-2"), Err(ParseDecIntError::InvalidCharacter('-')));
}

#[test]
fn test_round_trip() {
    let canonical = [
        "0", "7", "-7", "10", "105", "-105", "999999999999999999999999",
        "-123456789012345678901234567890",
    ];
    for t in canonical {
        assert_eq!(dec(t).to_string(), t);
    }
}

#[test]
fn test_from() {
    let num: i8 = 12;
    let big: DecInt = num.into();
    assert_eq!(big, dec("12"));

    let num: i16 = -100;
    let big: DecInt = num.into();
    assert_eq!(big, dec("-100"));

    let num: u32 = 0;
    let big: DecInt = num.into();
    assert!(big.is_zero());

    let num: isize = -10000;
    let big: DecInt = num.into();
    assert_eq!(big.to_string(), "-10000");

    let num: i64 = -113132;
    let big: DecInt = num.into();
    assert_eq!(big.to_string(), "-113132");

    let num: u64 = 18446744073709551615;
    let big: DecInt = num.into();
    assert_eq!(big.to_string(), "18446744073709551615");

    // small values come out of the shared caches
    assert_eq!(DecInt::from(16_u8), dec("16"));
    assert_eq!(DecInt::from(-16_i32), dec("-16"));
}

#[test]
fn test_cmp_magnitude() {
    assert_eq!(dec("123").cmp_magnitude(&dec("-1023")), Ordering::Less);
    assert_eq!(dec("1023").cmp_magnitude(&dec("123")), Ordering::Greater);
    assert_eq!(dec("-123").cmp_magnitude(&dec("123")), Ordering::Equal);
    // equal lengths differing only in the least significant digit
    assert_eq!(dec("121").cmp_magnitude(&dec("122")), Ordering::Less);
    // equal lengths where the most significant digit decides
    assert_eq!(dec("91").cmp_magnitude(&dec("19")), Ordering::Greater);
    assert_eq!(dec("0").cmp_magnitude(&dec("0")), Ordering::Equal);
}

#[test]
fn test_ord() {
    assert!(dec("-5") < dec("3"));
    assert!(dec("-10") < dec("-2"));
    assert!(dec("10") > dec("2"));
    assert!(dec("0") > dec("-1"));
    assert!(dec("0") < dec("1"));
    assert_eq!(dec("42").cmp(&dec("42")), Ordering::Equal);
}

#[test]
fn test_add() {
    assert_eq!(dec("123") + dec("-23"), dec("100"));
    assert_eq!(dec("-999") + dec("-1"), dec("-1000"));
    assert_eq!(dec("999") + dec("1"), dec("1000"));
    assert_eq!(dec("-1000") + dec("999"), dec("-1"));
    assert_eq!(dec("10000") + dec("-1"), dec("9999"));
    assert_eq!(dec("500") + dec("-500"), ZERO);

    let a = dec("31415926535897932384626433832795028841971693993751");
    let b = dec("27182818284590452353602874713526624977572470936999");
    assert_eq!(&a + &b, dec("58598744820488384738229308546321653819544164930750"));
    assert_eq!(&a - &b, dec("4233108251307480031023559119268403864399223056752"));
}

#[test]
fn test_add_identities() {
    let values = ["0", "1", "-1", "99", "-100", "123456789123456789"];
    for t in values {
        let x = dec(t);
        assert_eq!(&x + &ZERO, x);
        assert_eq!(&ZERO + &x, x);
        assert_eq!(x.clone() + (-x.clone()), ZERO);
    }
    // commutativity
    let pairs = [("123", "-23"), ("-999", "-1"), ("12345", "98765"), ("-7", "7")];
    for (s, t) in pairs {
        assert_eq!(dec(s) + dec(t), dec(t) + dec(s));
    }
}

#[test]
fn test_sub() {
    assert_eq!(dec("123") - dec("23"), dec("100"));
    assert_eq!(dec("23") - dec("123"), dec("-100"));
    assert_eq!(dec("-1") - dec("-1"), ZERO);
    assert_eq!(ZERO - dec("5"), dec("-5"));

    let mut x = dec("1000");
    x -= dec("1");
    assert_eq!(x, dec("999"));
}

#[test]
fn test_neg() {
    assert_eq!(-dec("12"), dec("-12"));
    assert_eq!(-dec("-12"), dec("12"));
    assert_eq!(-ZERO, ZERO);
    assert!(!(-ZERO).is_negative());
    assert_eq!(dec("-12").abs(), dec("12"));
}

#[test]
fn test_mul() {
    assert_eq!(dec("-12") * dec("11"), dec("-132"));
    assert_eq!(dec("999") * dec("999"), dec("998001"));
    assert_eq!(dec("7919") * dec("7919") * dec("7919"), dec("496604932559"));

    let a = dec("123456789123456789");
    let b = dec("987654321987654321");
    assert_eq!(&a * &b, dec("121932631356500531347203169112635269"));

    assert_eq!(
        dec("999999999999999999999999") * dec("123456"),
        dec("123455999999999999999999876544")
    );
    assert_eq!(
        dec("-12345678901234567890") * dec("98765432109876543210"),
        dec("-1219326311370217952237463801111263526900")
    );
}

#[test]
fn test_mul_large() {
    let a = dec("31415926535897932384626433832795028841971693993751");
    let b = dec("27182818284590452353602874713526624977572470936999");
    let product = dec(concat!(
        "8539734222673567065463550869546574495034888535764911978550621975651711829588",
        "45924077964935420693249"
    ));
    assert_eq!(&a * &b, product);
}

#[test]
fn test_mul_identities() {
    let values = ["0", "1", "-1", "10", "-105", "999999999999999999999999"];
    for t in values {
        let x = dec(t);
        assert_eq!(&x * &dec("1"), x);
        assert_eq!(&x * &ZERO, ZERO);
        assert_eq!(&ZERO * &x, ZERO);
    }
}

#[test]
fn test_mul_sign_rule() {
    assert!(!(dec("3") * dec("4")).is_negative());
    assert!((dec("-3") * dec("4")).is_negative());
    assert!((dec("3") * dec("-4")).is_negative());
    assert!(!(dec("-3") * dec("-4")).is_negative());
    // a zero product is never negative
    assert!(!(dec("-3") * ZERO).is_negative());
}

#[test]
fn test_num_digits() {
    assert_eq!(dec("0").num_digits(), 0);
    assert_eq!(dec("7").num_digits(), 1);
    assert_eq!(dec("-1000").num_digits(), 4);
    assert_eq!((dec("999") + dec("1")).num_digits(), 4);
    assert_eq!((dec("1000") - dec("1")).num_digits(), 3);
}
