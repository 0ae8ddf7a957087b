/// Threads a value through a function, left to right.
///
/// This trait is automatically implemented for all sized types.
///
/// # Examples
///
/// ```
/// use groupwise::func::Pipe;
///
/// let shouted = "hello"
///     .pipe(str::to_uppercase)
///     .pipe(|text| text + "!");
///
/// assert_eq!(shouted, "HELLO!");
/// ```
pub trait Pipe: Sized {
    /// Calls `f` with `self` and returns its result.
    #[inline]
    fn pipe<R>(self, f: impl FnOnce(Self) -> R) -> R {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Composes functions left to right.
///
/// `pipe!(f, g, h)` is a closure computing `h(g(f(x)))`.
/// `pipe!(value => f, g, h)` applies that composition to `value` right away.
///
/// # Examples
///
/// ```
/// use groupwise::pipe;
///
/// let double_then_describe = pipe!(|num: i32| num * 2, |num| format!("<{num}>"));
/// assert_eq!(double_then_describe(21), "<42>");
///
/// assert_eq!(pipe!(3 => |num| num + 1, |num| num * num), 16);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr => $($f:expr),+ $(,)?) => {{
        let value = $value;
        $(let value = ($f)(value);)+
        value
    }};
    ($($f:expr),+ $(,)?) => {
        move |value| $crate::pipe!(value => $($f),+)
    };
}
