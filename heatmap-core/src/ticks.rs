//! Nice tick generation and tick label formatting for linear axes.
//!
//! Tick steps are 1, 2 or 5 times a power of ten, chosen so that roughly
//! `count` ticks land inside `[start, stop]`. Default labels use the fixed
//! precision implied by the step and group thousands with commas.

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Returns `(i1, i2, inc)`. A negative `inc` means the step is `1 / -inc`.
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scale = 10f64.powf(-power) / factor;
        i1 = (start * scale).round();
        i2 = (stop * scale).round();
        if i1 / scale < start {
            i1 += 1.0;
        }
        if i2 / scale > stop {
            i2 -= 1.0;
        }
        inc = -scale;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Evenly spaced, human friendly values inside `[start, stop]`.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut values: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();
    if reverse {
        values.reverse();
    }
    values
}

/// Distance between adjacent values returned by [`ticks`].
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    let step = if inc < 0.0 { 1.0 / -inc } else { inc };
    if reverse {
        -step
    } else {
        step
    }
}

/// Decimal places needed to tell apart values `step` apart.
pub fn precision_fixed(step: f64) -> usize {
    let step = step.abs();
    if step == 0.0 || !step.is_finite() {
        return 0;
    }
    // Read the decimal exponent from scientific notation; log10 can land a
    // hair below an integer for exact powers of ten.
    let scientific = format!("{:e}", step);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, e)| e.parse::<i32>().ok())
        .unwrap_or(0);
    (-exponent).max(0) as usize
}

/// `value` with exactly `decimals` places. Never yields a negative zero.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => formatted,
    }
}

/// Fixed precision with a comma between each group of three integer digits.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format_fixed(value, decimals);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Default label format for ticks of a linear scale over `[start, stop]`.
pub fn default_tick_format(start: f64, stop: f64, count: usize) -> impl Fn(f64) -> String {
    let precision = precision_fixed(tick_step(start, stop, count));
    move |value| format_grouped(value, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_ticks_step_by_twenty() {
        let values = ticks(1753.0, 2015.0, 10);
        let expected: Vec<f64> = (0..13).map(|i| 1760.0 + 20.0 * i as f64).collect();
        assert_eq!(values, expected);
        assert_eq!(tick_step(1753.0, 2015.0, 10), 20.0);
    }

    #[test]
    fn test_fractional_ticks() {
        let values = ticks(0.0, 1.0, 10);
        assert_eq!(values.len(), 11);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[3], 0.3);
        assert_eq!(values[10], 1.0);
        assert_eq!(precision_fixed(tick_step(0.0, 1.0, 10)), 1);
    }

    #[test]
    fn test_degenerate_domain() {
        assert_eq!(ticks(2000.0, 2000.0, 10), vec![2000.0]);
        assert!(ticks(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn test_reversed_domain() {
        assert_eq!(ticks(10.0, 0.0, 5), vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_grouped_format() {
        assert_eq!(format_grouped(1760.0, 0), "1,760");
        assert_eq!(format_grouped(999.0, 0), "999");
        assert_eq!(format_grouped(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_grouped(-12000.0, 0), "-12,000");
    }

    #[test]
    fn test_fixed_format_drops_negative_zero() {
        assert_eq!(format_fixed(-0.001, 2), "0.00");
        assert_eq!(format_fixed(-1.5, 2), "-1.50");
        assert_eq!(format_fixed(8.72, 3), "8.720");
    }

    #[test]
    fn test_default_tick_format_for_years() {
        let format = default_tick_format(1753.0, 2015.0, 10);
        assert_eq!(format(1760.0), "1,760");
        assert_eq!(format(2000.0), "2,000");
    }
}
