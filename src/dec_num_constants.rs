pub const DIGIT_CHARS: [char; 10] = [
    '0' , '1' , '2' , '3' , '4' ,
    '5' , '6' , '7' , '8' , '9'
];

/// Base of the stored digit sequence.
pub const RADIX: u8 = 10;

/// Largest magnitude kept in the small-constant caches.
pub const MAX_CONSTANT: usize = 16;
