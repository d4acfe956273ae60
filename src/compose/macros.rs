/// Thread a value through a list of steps, left to right.
///
/// Each step may change the value's type. With no steps the seed is
/// returned as is.
///
/// ```
/// use trackway::combinators::outcome;
/// use trackway::pipe;
///
/// let root = pipe!(
///     16.0_f64,
///     outcome::of_success,
///     |o| outcome::map_success(o, f64::sqrt),
///     |o| outcome::map_success(o, |r| r as i64),
/// );
/// assert_eq!(root.success(), Some(4));
/// ```
#[macro_export]
macro_rules! pipe {
    ($seed:expr $(,)?) => {
        $seed
    };
    ($seed:expr, $($step:expr),+ $(,)?) => {{
        let value = $seed;
        $( let value = ($step)(value); )+
        value
    }};
}

/// Build a single function out of a list of steps, applied left to right.
///
/// `compose!(f, g)(x)` is `g(f(x))`.
///
/// ```
/// use trackway::compose;
///
/// let describe = compose!(|x: i32| x + 1, |x: i32| format!("<{x}>"));
/// assert_eq!(describe(1), "<2>");
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        |value| value
    };
    ($($step:expr),+ $(,)?) => {
        move |value| $crate::pipe!(value, $($step),+)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_macro_without_steps() {
        assert_eq!(crate::pipe!("seed"), "seed");
    }

    #[test]
    fn test_pipe_macro_changes_types() {
        let out = crate::pipe!(3_u8, u32::from, |x: u32| x * 1000, |x: u32| x.to_string());
        assert_eq!(out, "3000");
    }

    #[test]
    fn test_compose_macro() {
        let identity = crate::compose!();
        assert_eq!(identity(9), 9);

        let f = crate::compose!(|s: &str| s.len(), |n: usize| n % 2 == 0);
        assert!(f("ab"));
        assert!(!f("abc"));
    }
}
