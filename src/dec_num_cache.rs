use lazy_static::*;

use crate::DecInt;
use crate::dec_int::ZERO;
use crate::dec_num_constants::*;

lazy_static! {
    pub static ref POS_CACHE: [DecInt; MAX_CONSTANT + 1] = [
        ZERO,
        unsafe { DecInt::from_raw(vec![1]   , false) },
        unsafe { DecInt::from_raw(vec![2]   , false) },
        unsafe { DecInt::from_raw(vec![3]   , false) },
        unsafe { DecInt::from_raw(vec![4]   , false) },
        unsafe { DecInt::from_raw(vec![5]   , false) },
        unsafe { DecInt::from_raw(vec![6]   , false) },
        unsafe { DecInt::from_raw(vec![7]   , false) },
        unsafe { DecInt::from_raw(vec![8]   , false) },
        unsafe { DecInt::from_raw(vec![9]   , false) },
        unsafe { DecInt::from_raw(vec![0, 1], false) },
        unsafe { DecInt::from_raw(vec![1, 1], false) },
        unsafe { DecInt::from_raw(vec![2, 1], false) },
        unsafe { DecInt::from_raw(vec![3, 1], false) },
        unsafe { DecInt::from_raw(vec![4, 1], false) },
        unsafe { DecInt::from_raw(vec![5, 1], false) },
        unsafe { DecInt::from_raw(vec![6, 1], false) },
    ];
    pub static ref NEG_CACHE: [DecInt; MAX_CONSTANT + 1] = [
        ZERO,
        unsafe { DecInt::from_raw(vec![1]   , true) },
        unsafe { DecInt::from_raw(vec![2]   , true) },
        unsafe { DecInt::from_raw(vec![3]   , true) },
        unsafe { DecInt::from_raw(vec![4]   , true) },
        unsafe { DecInt::from_raw(vec![5]   , true) },
        unsafe { DecInt::from_raw(vec![6]   , true) },
        unsafe { DecInt::from_raw(vec![7]   , true) },
        unsafe { DecInt::from_raw(vec![8]   , true) },
        unsafe { DecInt::from_raw(vec![9]   , true) },
        unsafe { DecInt::from_raw(vec![0, 1], true) },
        unsafe { DecInt::from_raw(vec![1, 1], true) },
        unsafe { DecInt::from_raw(vec![2, 1], true) },
        unsafe { DecInt::from_raw(vec![3, 1], true) },
        unsafe { DecInt::from_raw(vec![4, 1], true) },
        unsafe { DecInt::from_raw(vec![5, 1], true) },
        unsafe { DecInt::from_raw(vec![6, 1], true) },
    ];
}
