use std::convert::TryFrom;

/// Number of elements used when the command line does not supply one.
pub const DEFAULT_ELEMENT_COUNT: usize = 1_000_000;

/// Parses the leading integer prefix of `argument`, permissively.
///
/// Leading whitespace and an optional sign are consumed, then digits up to
/// the first non-digit; out-of-range values saturate at the `i64` bounds.
/// Inputs with no leading integer parse as zero. This never fails: malformed
/// input degrades to a partial value or zero.
pub fn permissive_int(argument: &str) -> i64 {
    let mut chars = argument.trim_start().chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    // Accumulating in negative space lets both ends of the range saturate
    // exactly, since `i64::MIN` has no positive counterpart.
    let mut value: i64 = 0;
    for digit in chars.map_while(|c| c.to_digit(10)) {
        value = value
            .saturating_mul(10)
            .saturating_sub(i64::from(digit));
    }

    if negative {
        value
    } else {
        value.saturating_neg()
    }
}

/// Resolves the element count from the process arguments (binary name
/// excluded).
///
/// The first argument, if present, is parsed with [`permissive_int`]; a
/// negative result means empty loops and resolves to zero. Without an
/// argument the count is [`DEFAULT_ELEMENT_COUNT`]. Anything after the first
/// argument is ignored.
pub fn element_count<I>(mut args: I) -> usize
where
    I: Iterator<Item = String>,
{
    match args.next() {
        Some(argument) => {
            let parsed = permissive_int(&argument);
            if parsed <= 0 {
                0
            } else {
                usize::try_from(parsed).unwrap_or(usize::MAX)
            }
        }
        None => DEFAULT_ELEMENT_COUNT,
    }
}
