/// Float formatting for CSS values built on wasm.
///
/// Float-to-decimal formatting in `core::fmt` has panicked on wasm in some
/// toolchain/browser combinations, so these helpers never call `format!` on a
/// float. Finite values are scaled and rounded into an `i64`, then the integer
/// parts are printed.

/// Fixed-point rendering with exactly `decimals` fractional digits.
///
/// Values that overflow an `i64` once scaled print like infinities.
pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    let Some((negative, int_part, frac_part, decimals)) = split_fixed(v, decimals) else {
        return non_finite(v);
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&int_part.to_string());

    if decimals > 0 {
        out.push('.');
        let frac_str = frac_part.to_string();
        for _ in 0..decimals.saturating_sub(frac_str.len()) {
            out.push('0');
        }
        out.push_str(&frac_str);
    }

    out
}

/// Shortest CSS number with at most `max_decimals` digits: `30`, `4.5`, `-0.25`.
///
/// Non-finite input, and anything too large for an `i64` once scaled, renders
/// as `0` since CSS has no spelling for it.
pub fn fmt_css_number(v: f64, max_decimals: usize) -> String {
    if split_fixed(v, max_decimals).is_none() {
        return "0".to_string();
    }
    let fixed = fmt_f64_fixed(v, max_decimals);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}

/// 2^63, exact in f64. `i64::MAX as f64` rounds up to this value.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn split_fixed(v: f64, decimals: usize) -> Option<(bool, u64, u64, usize)> {
    if !v.is_finite() {
        return None;
    }

    // Keep the power of ten small enough to stay exact in f64.
    let decimals = decimals.min(9);
    let scale = 10_u64.checked_pow(decimals as u32).unwrap_or(1);
    let scaled = (v * scale as f64).round();
    if !scaled.is_finite() || scaled >= I64_LIMIT || scaled < -I64_LIMIT {
        return None;
    }

    let scaled_i = scaled as i64;
    let negative = scaled_i < 0;
    let abs_i = scaled_i.unsigned_abs();
    Some((negative, abs_i / scale, abs_i % scale, decimals))
}

fn non_finite(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v.is_sign_positive() {
        "Inf".to_string()
    } else {
        "-Inf".to_string()
    }
}
