use num_integer::Integer;
use num_traits::PrimInt;

/// Floor-modular position of a value inside a cyclic lookup table.
///
/// Calendar tables (weekdays, dominical letters, stems, branches) are all
/// indexed by `year mod len`, and the year may be negative. The remainder is
/// taken towards negative infinity so the index always lands in `0..len`.
pub(crate) trait TableIndex: Sized {
    fn table_index(&self, len: usize) -> usize;
}

impl<T: PrimInt + Integer> TableIndex for T {
    fn table_index(&self, len: usize) -> usize {
        assert!(len > 0, "cannot index into an empty table");
        let modulus = T::from(len).expect("table length should be representable as T");
        self.mod_floor(&modulus)
            .to_usize()
            .expect("floor remainder is non-negative and below the table length")
    }
}

pub(crate) trait MulDivFloor: Sized {
    fn mul_div_floor(&self, multiplier: Self, divisor: Self) -> Self;
}

impl<T: Integer + Copy> MulDivFloor for T {
    fn mul_div_floor(&self, multiplier: Self, divisor: Self) -> Self {
        // We want floor((a*b)/c) without computing the intermediate value a*b,
        // since it might overflow for years near the ends of the range.
        //
        // With a = q_a*c + r_a and b = q_b*c + r_b,
        //
        // a*b/c = q_a*b + r_a*q_b + r_a*r_b/c
        //
        // Both r_a and r_b are remainders from a division by c, so r_a*r_b is
        // bounded by c^2 and one final floor division settles the fraction.
        let a = *self;
        let b = multiplier;
        let c = divisor;
        let (q_a, r_a) = a.div_mod_floor(&c);
        let (q_b, r_b) = b.div_mod_floor(&c);
        let q_c = (r_a * r_b).div_floor(&c);
        q_a * b + r_a * q_b + q_c
    }
}
