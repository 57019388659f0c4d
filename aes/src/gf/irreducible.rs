/// Polynomials over GF(2) packed into a `u16`, bit `i` being the coefficient of x^i.
pub type Poly = u16;

pub fn degree(poly: Poly) -> Option<u32> {
    if poly == 0 {
        None
    } else {
        Some(Poly::BITS - 1 - poly.leading_zeros())
    }
}

/// Polynomial product, truncated to 16 coefficients.
pub fn poly_mul(a: Poly, b: Poly) -> Poly {
    (0..Poly::BITS)
        .filter(|i| (b >> i) & 1 == 1)
        .fold(0, |acc, i| acc ^ (a << i))
}

/// Remainder of `dividend / divisor`.
pub fn poly_mod(dividend: Poly, divisor: Poly) -> Poly {
    let Some(divisor_degree) = degree(divisor) else {
        panic!("division by the zero polynomial");
    };
    let mut remainder = dividend;
    while let Some(d) = degree(remainder) {
        if d < divisor_degree {
            break;
        }
        remainder ^= divisor << (d - divisor_degree);
    }
    remainder
}

/// Trial division by every polynomial of degree `1..=n/2`.
pub fn is_irreducible(poly: Poly) -> bool {
    let n = match degree(poly) {
        Some(n) if n >= 1 => n,
        _ => return false,
    };
    (2..(1 << (n / 2 + 1))).all(|divisor| poly_mod(poly, divisor) != 0)
}

/// All irreducible polynomials of degree exactly `n`.
pub fn list_irreducibles(n: u32) -> Vec<Poly> {
    assert!((1..Poly::BITS - 1).contains(&n), "degree must be in 1..15");
    ((1 << n)..(1 << (n + 1)))
        .filter(|&poly| is_irreducible(poly))
        .collect()
}
