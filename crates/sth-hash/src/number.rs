//! Decimal text for message construction.
//!
//! Token messages are the concatenated decimal text of a timestamp and two
//! coordinates, so a single differing character yields an unrelated token.
//! Coordinates are therefore rendered with the ECMAScript `Number::toString`
//! rules, the format every existing token set was produced with:
//!
//! | Decimal exponent `n` of `d₁d₂…dₖ × 10^(n−k)` | Output             |
//! |-----------------------------------------------|--------------------|
//! | `k ≤ n ≤ 21`                                  | `ddd000`           |
//! | `0 < n ≤ 21`                                  | `dd.ddd`           |
//! | `−6 < n ≤ 0`                                  | `0.000ddd`         |
//! | otherwise                                     | `d.ddde±x`         |
//!
//! The digit string is the shortest one that round-trips, which is also what
//! `{:e}` on `f64` produces, so only the layout needs to be done here.
//! `-0` renders as `0`.

/// Append the ECMAScript rendering of `x` to `out`.
pub fn push_js_number(out: &mut String, x: f64) {
    if x.is_nan() {
        out.push_str("NaN");
        return;
    }
    if x == 0.0 {
        out.push('0');
        return;
    }
    if x < 0.0 {
        out.push('-');
    }
    let x = x.abs();
    if x.is_infinite() {
        out.push_str("Infinity");
        return;
    }

    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| c.is_ascii_digit()).collect();
    let k = digits.len() as i32;
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.extend(std::iter::repeat_n('0', (n - k) as usize));
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        out.push_str(int);
        out.push('.');
        out.push_str(frac);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-n) as usize));
        out.push_str(&digits);
    } else {
        let (lead, rest) = digits.split_at(1);
        out.push_str(lead);
        if !rest.is_empty() {
            out.push('.');
            out.push_str(rest);
        }
        out.push('e');
        out.push(if n - 1 >= 0 { '+' } else { '-' });
        out.push_str(&(n - 1).abs().to_string());
    }
}

/// Owned-string convenience wrapper around [`push_js_number`].
pub fn js_number(x: f64) -> String {
    let mut out = String::new();
    push_js_number(&mut out, x);
    out
}
