use crate::rt_types::Native;

/// A pre-registered pure function.
pub(crate) struct Builtin {
    pub(crate) name: &'static str,
    pub(crate) f: Native,
}

// Sorted by name for binary search.
static BUILTINS: &[Builtin] = &[
    Builtin { name: "abs", f: Native::F1(f64::abs) },
    Builtin { name: "acos", f: Native::F1(f64::acos) },
    Builtin { name: "asin", f: Native::F1(f64::asin) },
    Builtin { name: "atan", f: Native::F1(f64::atan) },
    Builtin { name: "atan2", f: Native::F2(f64::atan2) },
    Builtin { name: "ceil", f: Native::F1(f64::ceil) },
    Builtin { name: "cos", f: Native::F1(f64::cos) },
    Builtin { name: "cosh", f: Native::F1(f64::cosh) },
    Builtin { name: "e", f: Native::F0(e) },
    Builtin { name: "exp", f: Native::F1(f64::exp) },
    Builtin { name: "fac", f: Native::F1(fac) },
    Builtin { name: "floor", f: Native::F1(f64::floor) },
    Builtin { name: "ln", f: Native::F1(f64::ln) },
    Builtin { name: "log", f: Native::F1(log) },
    Builtin { name: "log10", f: Native::F1(f64::log10) },
    Builtin { name: "max", f: Native::F2(f64::max) },
    Builtin { name: "min", f: Native::F2(f64::min) },
    Builtin { name: "ncr", f: Native::F2(ncr) },
    Builtin { name: "npr", f: Native::F2(npr) },
    Builtin { name: "pi", f: Native::F0(pi) },
    Builtin { name: "pow", f: Native::F2(f64::powf) },
    Builtin { name: "sin", f: Native::F1(f64::sin) },
    Builtin { name: "sinh", f: Native::F1(f64::sinh) },
    Builtin { name: "sqrt", f: Native::F1(f64::sqrt) },
    Builtin { name: "tan", f: Native::F1(f64::tan) },
    Builtin { name: "tanh", f: Native::F1(f64::tanh) },
];

pub(crate) fn find(name: &str) -> Option<&'static Builtin> {
    BUILTINS
        .binary_search_by(|b| b.name.cmp(name))
        .ok()
        .map(|i| &BUILTINS[i])
}

fn e() -> f64 {
    std::f64::consts::E
}

fn pi() -> f64 {
    std::f64::consts::PI
}

#[cfg(feature = "natural-log")]
fn log(a: f64) -> f64 {
    a.ln()
}

#[cfg(not(feature = "natural-log"))]
fn log(a: f64) -> f64 {
    a.log10()
}

fn fac(a: f64) -> f64 {
    if a.is_nan() || a < 0.0 {
        return f64::NAN;
    }
    if a > u32::MAX as f64 {
        return f64::INFINITY;
    }
    let n = a as u32;
    let mut result: u64 = 1;
    for i in 1..=u64::from(n) {
        result = match result.checked_mul(i) {
            Some(r) => r,
            None => return f64::INFINITY,
        };
    }
    result as f64
}

fn ncr(n: f64, r: f64) -> f64 {
    if n.is_nan() || r.is_nan() || n < 0.0 || r < 0.0 || n < r {
        return f64::NAN;
    }
    if n > u32::MAX as f64 || r > u32::MAX as f64 {
        return f64::INFINITY;
    }
    let (n, r) = (u64::from(n as u32), u64::from(r as u32));
    let r = match n.checked_sub(r) {
        Some(rest) => r.min(rest),
        None => return f64::NAN,
    };
    let mut result: u64 = 1;
    for i in 1..=r {
        // result * (n - r + i) / i stays integral at every step
        result = match result.checked_mul(n - r + i) {
            Some(p) => p / i,
            None => return f64::INFINITY,
        };
    }
    result as f64
}

fn npr(n: f64, r: f64) -> f64 {
    ncr(n, r) * fac(r)
}

// Operators compile to the same pure call nodes as named builtins.

pub(crate) fn add(a: f64, b: f64) -> f64 {
    a + b
}

pub(crate) fn sub(a: f64, b: f64) -> f64 {
    a - b
}

pub(crate) fn mul(a: f64, b: f64) -> f64 {
    a * b
}

pub(crate) fn div(a: f64, b: f64) -> f64 {
    a / b
}

pub(crate) fn fmod(a: f64, b: f64) -> f64 {
    a % b
}

pub(crate) fn pow(a: f64, b: f64) -> f64 {
    a.powf(b)
}

pub(crate) fn neg(a: f64) -> f64 {
    -a
}

pub(crate) fn comma(_a: f64, b: f64) -> f64 {
    b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted() {
        assert!(BUILTINS.windows(2).all(|w| w[0].name < w[1].name));
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(find("sqrt").map(|b| b.f.arity()), Some(1));
        assert_eq!(find("atan2").map(|b| b.f.arity()), Some(2));
        assert!(find("sqr").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn combinatorics() {
        assert_eq!(fac(0.0), 1.0);
        assert_eq!(fac(5.0), 120.0);
        assert_eq!(fac(5.9), 120.0);
        assert!(fac(-1.0).is_nan());
        assert_eq!(fac(30.0), f64::INFINITY);
        assert_eq!(ncr(6.0, 2.0), 15.0);
        assert_eq!(ncr(10.0, 10.0), 1.0);
        assert!(ncr(2.0, 3.0).is_nan());
        assert_eq!(npr(6.0, 2.0), 30.0);
    }

    #[test]
    fn combinatorics_propagate_nan() {
        assert!(fac(f64::NAN).is_nan());
        assert!(ncr(f64::NAN, 1.0).is_nan());
        assert!(ncr(5.0, f64::NAN).is_nan());
        assert!(npr(f64::NAN, 1.0).is_nan());
    }
}
