/// A boxed single-argument step for runtime-ordered pipelines.
pub type BoxedStep<'a, T> = Box<dyn FnOnce(T) -> T + 'a>;

/// Apply `steps` to `seed`, left to right, and return the final value.
///
/// An empty list of steps returns `seed` unchanged. For steps whose types
/// differ from one to the next, use the [`pipe!`](crate::pipe) macro.
///
/// # Examples
///
/// ```
/// use trackway::compose::{pipe, BoxedStep};
///
/// let steps: Vec<BoxedStep<'_, i32>> = vec![Box::new(|x| x + 1), Box::new(|x| x * 10)];
/// assert_eq!(pipe(2, steps), 30);
/// ```
pub fn pipe<'a, T, I>(seed: T, steps: I) -> T
where
    I: IntoIterator<Item = BoxedStep<'a, T>>,
{
    steps.into_iter().fold(seed, |value, step| step(value))
}

/// Collect `steps` into a single function that applies them left to right.
pub fn compose<'a, T, I>(steps: I) -> impl FnOnce(T) -> T + 'a
where
    T: 'a,
    I: IntoIterator<Item = BoxedStep<'a, T>>,
{
    let steps: Vec<BoxedStep<'a, T>> = steps.into_iter().collect();
    move |seed| pipe(seed, steps)
}

/// Method-call form of function application, available on every sized value.
///
/// ```
/// use trackway::compose::Pipe;
///
/// assert_eq!(3_i32.pipe(|x| x * 2).pipe(|x| x.to_string()), "6");
/// ```
pub trait Pipe: Sized {
    #[inline]
    fn pipe<R, G>(self, f: G) -> R
    where
        G: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
